//! Controls View Component
//!
//! Renders the aside panel: the category selector and the search input.
//! The focused control gets a highlighted border.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{ControlsViewModel, FocusTarget};

pub struct ControlsView<'a> {
    model: &'a ControlsViewModel,
}

impl<'a> ControlsView<'a> {
    pub fn new(model: &'a ControlsViewModel) -> Self {
        Self { model }
    }
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

impl<'a> Widget for ControlsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let options_height = self.model.category_options.len() as u16 + 2;
        let chunks = Layout::vertical([
            Constraint::Length(options_height),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

        self.render_category(chunks[0], buf);
        self.render_search(chunks[1], buf);
    }
}

impl<'a> ControlsView<'a> {
    fn render_category(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.model.focus == FocusTarget::Category;
        let block = Block::default()
            .title(self.model.category_label.as_str())
            .borders(Borders::ALL)
            .border_style(focus_border(focused));

        let lines: Vec<Line> = self
            .model
            .category_options
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                if idx == self.model.selected_category {
                    let mut style = Style::default().add_modifier(Modifier::BOLD);
                    if focused {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Line::from(Span::styled(format!("▶ {}", label), style))
                } else {
                    Line::from(Span::raw(format!("  {}", label)))
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.model.focus == FocusTarget::Search;
        let block = Block::default()
            .title(self.model.search_label.as_str())
            .borders(Borders::ALL)
            .border_style(focus_border(focused));

        let mut spans = if self.model.search_term.is_empty() {
            vec![Span::styled(
                self.model.search_placeholder.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            )]
        } else {
            vec![Span::raw(self.model.search_term.as_str())]
        };
        if focused {
            // Cursor sits after the term, before any placeholder
            let at = if self.model.search_term.is_empty() {
                0
            } else {
                spans.len()
            };
            spans.insert(at, Span::styled("█", Style::default().fg(Color::Yellow)));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

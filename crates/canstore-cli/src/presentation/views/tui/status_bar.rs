//! Status Bar View Component
//!
//! Renders the bottom status bar with the result count, the active filter
//! and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

/// Status bar view wrapper
pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        // Split into left (status) and right (help) sections
        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(&self.model.status_message, Style::default().fg(color)),
            Span::raw(" | Filter: "),
            Span::raw(&self.model.filter_description),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let mut help_spans = Vec::with_capacity(self.model.key_hints.len() * 2);
        for (key, action) in &self.model.key_hints {
            help_spans.push(Span::styled(
                key.as_str(),
                Style::default().fg(Color::Yellow),
            ));
            help_spans.push(Span::raw(format!("{} ", action)));
        }
        Paragraph::new(Line::from(help_spans)).render(chunks[1], buf);
    }
}

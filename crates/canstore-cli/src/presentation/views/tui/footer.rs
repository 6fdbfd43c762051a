//! Footer View Component
//!
//! Static icon attribution, unrelated to the catalog data.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::FooterViewModel;

pub struct FooterView<'a> {
    model: &'a FooterViewModel,
}

impl<'a> FooterView<'a> {
    pub fn new(model: &'a FooterViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut spans = Vec::with_capacity(self.model.credits.len() * 2);
        for (i, credit) in self.model.credits.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", dim));
            }
            spans.push(Span::styled(credit.as_str(), dim));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.model.heading.as_str())
                    .borders(Borders::TOP),
            )
            .render(area, buf);
    }
}

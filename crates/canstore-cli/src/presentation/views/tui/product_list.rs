//! Product List View Component
//!
//! Renders the main region: loading notice, load failure, or one card per
//! visible product.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{ListContent, ProductCardViewModel, ProductListViewModel};

use super::status_level_to_color;

pub struct ProductListView<'a> {
    model: &'a ProductListViewModel,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a ProductListViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProductListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.model.content {
            ListContent::Loading { message } => {
                Paragraph::new(message.as_str())
                    .block(Block::default().title("Loading").borders(Borders::ALL))
                    .render(area, buf);
            }
            ListContent::Failed { title, message } => {
                Paragraph::new(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red),
                ))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(title.as_str())
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .render(area, buf);
            }
            ListContent::Ready {
                cards,
                empty_message,
            } => {
                let block = Block::default()
                    .title(format!("Products ({})", cards.len()))
                    .borders(Borders::ALL);

                if cards.is_empty() {
                    Paragraph::new(empty_message.as_str())
                        .block(block)
                        .render(area, buf);
                    return;
                }

                let items: Vec<ListItem> = cards
                    .iter()
                    .skip(self.model.scroll)
                    .map(card_item)
                    .collect();
                List::new(items).block(block).render(area, buf);
            }
        }
    }
}

fn card_item(card: &ProductCardViewModel) -> ListItem<'_> {
    let tag_color = status_level_to_color(card.kind_color);
    let dim = Style::default().add_modifier(Modifier::DIM);

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(card.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(format!("[{}]", card.kind), Style::default().fg(tag_color)),
        ]),
        Line::from(Span::raw(format!("  {}", card.price_label))),
        Line::from(Span::styled(format!("  {}", card.image_path), dim)),
    ])
}

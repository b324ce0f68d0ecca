//! Amphibian cards: one bordered block per record.

use crate::model::Amphibian;
use crate::ui::layout::wrapped_line_count;
use crate::ui::theme::{CARD_BORDER, FROG_GREEN, HEADER_TEXT, LINK_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

const IMAGE_LABEL: &str = "Image: ";

/// Full height of the card for `amphibian` at `width` columns.
pub fn card_height(amphibian: &Amphibian, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2);
    let image_rows = wrapped_line_count(
        &format!("{}{}", IMAGE_LABEL, amphibian.image_url),
        inner_width,
    );
    let description_rows = wrapped_line_count(&amphibian.description, inner_width);
    2u16.saturating_add(image_rows).saturating_add(description_rows)
}

pub struct AmphibianCard<'a> {
    amphibian: &'a Amphibian,
}

impl<'a> AmphibianCard<'a> {
    pub fn new(amphibian: &'a Amphibian) -> Self {
        Self { amphibian }
    }
}

impl Widget for AmphibianCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER))
            .title(Span::styled(
                format!(" {} ", self.amphibian.title()),
                Style::default().fg(FROG_GREEN).add_modifier(Modifier::BOLD),
            ));

        let mut lines = vec![Line::from(vec![
            Span::styled(IMAGE_LABEL, Style::default().fg(HEADER_TEXT)),
            Span::styled(
                self.amphibian.image_url.clone(),
                Style::default()
                    .fg(LINK_TEXT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])];
        // Spans never break on '\n'; rows must line up with `card_height`.
        lines.extend(self.amphibian.description.split('\n').map(|text| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(HEADER_TEXT),
            ))
        }));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Scrollable stack of cards starting at `offset`.
pub struct CardList<'a> {
    amphibians: &'a [Amphibian],
    offset: usize,
}

impl<'a> CardList<'a> {
    pub fn new(amphibians: &'a [Amphibian], offset: usize) -> Self {
        Self { amphibians, offset }
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        let bottom = area.y.saturating_add(area.height);

        for amphibian in self.amphibians.iter().skip(self.offset) {
            if y >= bottom {
                break;
            }
            // The last visible card is clipped to whatever space remains.
            let height = card_height(amphibian, area.width).min(bottom - y);
            let rect = Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            };
            AmphibianCard::new(amphibian).render(rect, buf);
            y = y.saturating_add(height);
        }
    }
}

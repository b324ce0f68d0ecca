use crate::ui::theme::{
    FROG_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use crate::ui::view_state::ViewState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ViewState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (indicator, status, status_color) = status_parts(state);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Amphibians",
                Style::default().fg(FROG_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(indicator, Style::default().fg(status_color)),
            Span::styled(" ", text_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_parts(state: &ViewState) -> (&'static str, String, ratatui::style::Color) {
    match state {
        ViewState::Loading => ("●", "Loading".to_string(), STATUS_PENDING),
        ViewState::Success(amphibians) => {
            let noun = if amphibians.len() == 1 {
                "amphibian"
            } else {
                "amphibians"
            };
            ("●", format!("{} {}", amphibians.len(), noun), STATUS_OK)
        }
        ViewState::Error => ("●", "Error".to_string(), STATUS_ERROR),
    }
}

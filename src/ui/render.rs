use crate::ui::app::App;
use crate::ui::cards::CardList;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rows, layout_regions};
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_PENDING};
use crate::ui::view_state::ViewState;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.view_state();

    frame.render_widget(Header::new().widget(&state), header);
    frame.render_widget(Clear, body);
    match &state {
        ViewState::Loading => draw_loading(frame, body),
        ViewState::Error => draw_error(frame, body),
        ViewState::Success(amphibians) if amphibians.is_empty() => draw_empty(frame, body),
        ViewState::Success(amphibians) => {
            frame.render_widget(CardList::new(amphibians, app.scroll()), body);
        }
    }
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect) {
    let widget = Paragraph::new(Line::from("Loading amphibians…"))
        .style(Style::default().fg(STATUS_PENDING))
        .alignment(Alignment::Center);
    frame.render_widget(widget, centered_rows(body, 1));
}

fn draw_error(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![
        Line::from("Failed to load amphibians.")
            .style(Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Press r to retry").style(Style::default().fg(HEADER_TEXT)),
    ];
    let height = lines.len() as u16;
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, centered_rows(body, height));
}

fn draw_empty(frame: &mut Frame<'_>, body: Rect) {
    let widget = Paragraph::new(Line::from("No amphibians"))
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(widget, centered_rows(body, 1));
}

use crate::model::Amphibian;
use crate::ui::cards::card_height;
use crate::ui::view_state::{ViewState, ViewStateController};
use tokio::sync::watch;

pub struct App {
    should_quit: bool,
    controller: ViewStateController,
    view: watch::Receiver<ViewState>,
    /// Index of the first visible card.
    scroll: usize,
    body_width: u16,
    body_height: u16,
}

impl App {
    pub fn new(controller: ViewStateController) -> Self {
        let view = controller.subscribe();
        Self {
            should_quit: false,
            controller,
            view,
            scroll: 0,
            body_width: 0,
            body_height: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Current view state as last published by the controller.
    pub fn view_state(&self) -> ViewState {
        self.view.borrow().clone()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Called after the controller published a transition.
    pub fn on_view_changed(&mut self) {
        let count = self.card_count();
        if self.scroll >= count {
            self.scroll = count.saturating_sub(1);
        }
    }

    /// Retry/refresh action. The fetch runs in the background.
    pub fn refresh(&mut self) {
        self.scroll = 0;
        drop(self.controller.refresh());
    }

    /// Record the size of the card area.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body_width = cols;
        self.body_height = rows;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.card_count().saturating_sub(1);
        let next = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll = next.min(max);
    }

    /// Advance past every card fully visible from the current top.
    pub fn page_down(&mut self) {
        let page = {
            let view = self.view.borrow();
            let cards = view.amphibians().unwrap_or_default();
            self.cards_fitting(cards.iter().skip(self.scroll))
        };
        self.scroll_by(page as isize);
    }

    /// Move back by as many cards as fit above the current top.
    pub fn page_up(&mut self) {
        let page = {
            let view = self.view.borrow();
            let cards = view.amphibians().unwrap_or_default();
            self.cards_fitting(cards.iter().take(self.scroll).rev())
        };
        self.scroll_by(-(page as isize));
    }

    pub fn scroll_to_start(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = self.card_count().saturating_sub(1);
    }

    /// Number of leading cards in `cards` that fit the body whole; at least one.
    fn cards_fitting<'a>(&self, cards: impl Iterator<Item = &'a Amphibian>) -> usize {
        let mut used: u16 = 0;
        let mut count = 0;
        for amphibian in cards {
            used = used.saturating_add(card_height(amphibian, self.body_width));
            if used > self.body_height {
                break;
            }
            count += 1;
        }
        count.max(1)
    }

    fn card_count(&self) -> usize {
        self.view.borrow().amphibians().map_or(0, <[_]>::len)
    }
}

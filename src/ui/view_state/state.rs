//! Renderable state of the amphibian list.

use crate::model::Amphibian;
use crate::ui::mvi::UiState;

/// Exactly one of Loading, Success, Error is active at any time.
///
/// Error deliberately carries no payload: the failure detail goes to the
/// log, observers only learn that the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// A fetch is outstanding.
    #[default]
    Loading,

    /// The last fetch succeeded; records are in upstream order.
    Success(Vec<Amphibian>),

    /// The last fetch failed.
    Error,
}

impl UiState for ViewState {}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Records of a Success state, `None` otherwise.
    pub fn amphibians(&self) -> Option<&[Amphibian]> {
        match self {
            Self::Success(amphibians) => Some(amphibians),
            _ => None,
        }
    }
}

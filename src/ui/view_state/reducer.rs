use crate::ui::mvi::Reducer;

use super::intent::ViewIntent;
use super::state::ViewState;

/// Every intent is valid from every state: there is no terminal state and
/// a refresh may start at any time.
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::Refresh => ViewState::Loading,
            ViewIntent::Loaded { amphibians } => ViewState::Success(amphibians),
            ViewIntent::Failed => ViewState::Error,
        }
    }
}

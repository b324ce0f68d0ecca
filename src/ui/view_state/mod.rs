//! View state of the amphibian list (MVI pattern).

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ViewStateController;
pub use intent::ViewIntent;
pub use reducer::ViewReducer;
pub use state::ViewState;

//! Unidirectional state primitives for the UI layer.
//!
//! ```text
//! refresh / fetch outcome ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                                     │
//!          └────────────────────── retry key ────────────────────┘
//! ```
//!
//! Reducers are pure; side effects (spawning fetches, publishing to
//! observers) live in whoever dispatches the intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

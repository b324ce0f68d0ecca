use crate::model::Amphibian;
use crate::ui::mvi::Intent;

/// Intents folded by [`ViewReducer`](super::ViewReducer).
#[derive(Debug)]
pub enum ViewIntent {
    /// A refresh started.
    Refresh,

    /// The fetch returned these records.
    Loaded { amphibians: Vec<Amphibian> },

    /// The fetch failed; the cause has already been logged.
    Failed,
}

impl Intent for ViewIntent {}

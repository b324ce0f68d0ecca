//! Owner of the [`ViewState`] cell and the refresh operation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::gateway::AmphibianRepository;
use crate::ui::mvi::Reducer;

use super::intent::ViewIntent;
use super::reducer::ViewReducer;
use super::state::ViewState;

/// Publishes [`ViewState`] transitions driven by fetches.
///
/// Cloning yields another handle to the same cell. Every refresh is tagged
/// with a generation; a completion from an older generation is dropped so a
/// slow stale response never overwrites a newer one.
#[derive(Clone)]
pub struct ViewStateController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    repository: Arc<dyn AmphibianRepository>,
    state: watch::Sender<ViewState>,
    /// Generation of the most recent refresh.
    generation: AtomicU64,
}

impl ViewStateController {
    /// Create the controller and start the first fetch.
    ///
    /// Must be called inside a tokio runtime context.
    pub fn new(repository: Arc<dyn AmphibianRepository>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        let controller = Self {
            inner: Arc::new(ControllerInner {
                repository,
                state,
                generation: AtomicU64::new(0),
            }),
        };
        // Initial fetch is fire-and-forget; observers follow it via `subscribe`.
        drop(controller.refresh());
        controller
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    /// New observer of state transitions. The current value counts as seen.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.state.subscribe()
    }

    /// Generation of the most recent refresh (1 after construction).
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    /// Publish Loading, then fetch in a background task.
    ///
    /// Loading is visible to observers before this returns. Dropping the
    /// returned handle does not cancel the fetch.
    pub fn refresh(&self) -> JoinHandle<()> {
        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            // Bumped under the cell lock so completions see a consistent fence.
            generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ViewReducer::reduce(std::mem::take(state), ViewIntent::Refresh);
        });
        tracing::debug!(generation, "Refresh started");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let intent = match inner.repository.fetch_amphibians().await {
                Ok(amphibians) => {
                    tracing::info!(generation, count = amphibians.len(), "Amphibians loaded");
                    ViewIntent::Loaded { amphibians }
                }
                Err(err) => {
                    tracing::warn!(
                        generation,
                        kind = err.kind(),
                        error = %err,
                        "Failed to fetch amphibians"
                    );
                    ViewIntent::Failed
                }
            };
            inner.complete(generation, intent);
        })
    }
}

impl ControllerInner {
    fn complete(&self, generation: u64, intent: ViewIntent) {
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = ViewReducer::reduce(std::mem::take(state), intent);
            true
        });
        if !applied {
            tracing::debug!(generation, "Discarded stale fetch result");
        }
    }
}

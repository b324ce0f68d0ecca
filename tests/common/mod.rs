//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use amphibians::gateway::{AmphibianRepository, FetchError};
use amphibians::model::Amphibian;
use amphibians::ui::view_state::{ViewState, ViewStateController};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn amphibian(name: &str, kind: &str) -> Amphibian {
    Amphibian {
        name: name.to_string(),
        kind: kind.to_string(),
        description: format!("{name} is a {kind}."),
        image_url: format!("https://img.example/{}.png", name.to_lowercase()),
    }
}

pub fn axolotl() -> Amphibian {
    Amphibian {
        name: "Axolotl".to_string(),
        kind: "Salamander".to_string(),
        description: "...".to_string(),
        image_url: "http://x/a.png".to_string(),
    }
}

/// Wait until the controller leaves Loading, or panic after `timeout`.
pub async fn wait_settled(controller: &ViewStateController, timeout: Duration) -> ViewState {
    let mut rx = controller.subscribe();
    let state = tokio::time::timeout(timeout, rx.wait_for(|s| !s.is_loading()))
        .await
        .expect("controller did not settle in time")
        .expect("controller dropped");
    state.clone()
}

// -- Scripted repository ------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Outcome {
    Records(Vec<Amphibian>),
    Status(u16),
    Malformed,
}

#[derive(Debug, Clone)]
pub struct Step {
    pub delay: Duration,
    pub outcome: Outcome,
}

impl Step {
    pub fn ok(records: Vec<Amphibian>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Outcome::Records(records),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Outcome::Status(status),
        }
    }

    pub fn malformed() -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Outcome::Malformed,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// In-memory repository that replays scripted steps, one per call.
/// Once the script runs out every call returns an empty list.
#[derive(Default)]
pub struct ScriptedRepository {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedRepository {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn push(&self, step: Step) {
        self.steps.lock().push_back(step);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AmphibianRepository for ScriptedRepository {
    async fn fetch_amphibians(&self) -> Result<Vec<Amphibian>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .pop_front()
            .unwrap_or_else(|| Step::ok(Vec::new()));

        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }

        match step.outcome {
            Outcome::Records(records) => Ok(records),
            Outcome::Status(status) => Err(FetchError::Status {
                url: "scripted://amphibians".to_string(),
                status,
            }),
            Outcome::Malformed => Err(FetchError::Decode {
                url: "scripted://amphibians".to_string(),
                source: serde_json::from_str::<Vec<Amphibian>>("{").unwrap_err(),
            }),
        }
    }
}

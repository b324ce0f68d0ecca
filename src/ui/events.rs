use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::shutdown::ShutdownHandle;
use crate::ui::view_state::ViewState;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The view state controller published a transition.
    ViewChanged,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = event_tx.send(AppEvent::Shutdown);
                    break;
                }

                // Use short poll timeout to check shutdown flag frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            input_failed(&event_tx, "read", &err);
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(err) => {
                        input_failed(&event_tx, "poll", &err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    /// Forward every view-state transition into the event loop so the UI
    /// redraws as soon as a fetch settles.
    pub fn watch_view(&self, runtime: &Handle, mut view: watch::Receiver<ViewState>) {
        let tx = self.tx.clone();
        runtime.spawn(async move {
            while view.changed().await.is_ok() {
                if tx.send(AppEvent::ViewChanged).is_err() {
                    break;
                }
            }
        });
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Input is gone for good; the UI loop must stop since no quit key can arrive.
fn input_failed(tx: &mpsc::Sender<AppEvent>, stage: &str, err: &io::Error) {
    tracing::error!(error = %err, "Terminal {} failed", stage);
    let _ = tx.send(AppEvent::Shutdown);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_failure_requests_shutdown() {
        let (tx, rx) = mpsc::channel();
        input_failed(&tx, "read", &io::Error::other("terminal gone"));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Shutdown)));
        assert!(rx.try_recv().is_err());
    }
}

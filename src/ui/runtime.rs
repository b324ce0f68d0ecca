use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view_state::ViewStateController;
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits or shutdown is signaled.
///
/// Blocks the calling thread; fetches run on `runtime`.
pub fn run(
    controller: ViewStateController,
    tick_rate: Duration,
    shutdown: ShutdownHandle,
    runtime: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    events.watch_view(runtime, controller.subscribe());
    let mut app = App::new(controller);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        on_resize(&mut app, cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => on_resize(&mut app, cols, rows),
            Ok(AppEvent::ViewChanged) => app.on_view_changed(),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}

fn on_resize(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1));
}

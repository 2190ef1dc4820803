//! Terminal event abstraction.
//!
//! Runs a blocking reader that polls crossterm and forwards events over a
//! channel, emitting `Tick` whenever nothing arrives within the tick rate.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel or button activity
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for frame updates
    Tick,
}

/// What the reader does after one poll
#[derive(Debug)]
enum ReadStep {
    Emit(AppEvent),
    Skip,
    Stop,
}

/// Spawn the reader and return the receiving end of its channel.
///
/// The reader stops when the terminal fails or on the first send after the
/// receiver is dropped. Either way the channel closes.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        match next_step(event::poll(tick_rate), event::read) {
            ReadStep::Emit(app_event) => {
                if tx.send(app_event).is_err() {
                    break;
                }
            }
            ReadStep::Skip => {}
            ReadStep::Stop => break,
        }
    });

    rx
}

fn next_step(polled: io::Result<bool>, read: impl FnOnce() -> io::Result<Event>) -> ReadStep {
    match polled {
        Ok(true) => match read() {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                ReadStep::Emit(AppEvent::Key(key))
            }
            Ok(Event::Mouse(mouse)) => ReadStep::Emit(AppEvent::Mouse(mouse)),
            Ok(Event::Resize(w, h)) => ReadStep::Emit(AppEvent::Resize(w, h)),
            Ok(_) => ReadStep::Skip,
            Err(e) => {
                tracing::error!("Terminal read failed: {}", e);
                ReadStep::Stop
            }
        },
        Ok(false) => ReadStep::Emit(AppEvent::Tick),
        Err(e) => {
            tracing::error!("Terminal poll failed: {}", e);
            ReadStep::Stop
        }
    }
}

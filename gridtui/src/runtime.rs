//! Single-app event loop: crossterm events in, diffed frames out.

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};
use thiserror::Error;
use tokio::select;

use crate::buffer::Buffer;
use crate::event::{Event, convert_event};
use crate::style::TextStyle;
use crate::terminal::TerminalGuard;
use crate::theme::Theme;
use crate::wakeup::{self, WakeupSender};

/// Errors surfaced to `main`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal event stream ended unexpectedly")]
    EventStreamClosed,
}

/// A top-level application the runtime can drive.
pub trait App {
    /// Called once before the loop starts so the app can hand the wakeup
    /// sender to its reactive state.
    fn install_wakeup(&mut self, sender: WakeupSender);

    /// Handle one input event. Return `false` to shut down.
    fn on_event(&mut self, event: &Event) -> bool;

    /// Draw a full frame.
    fn render(&self, buffer: &mut Buffer, theme: &Theme);
}

/// The event loop. Renders after every handled event and whenever the wakeup
/// channel fires (state mutated outside an input event, e.g. a debounce
/// commit). Rendering is cheap: only cells that changed reach the terminal.
pub struct Runtime {
    theme: Theme,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub async fn run<A: App>(&mut self, mut app: A) -> Result<(), RuntimeError> {
        let (wakeup_tx, mut wakeup_rx) = wakeup::channel();
        app.install_wakeup(wakeup_tx);

        let mut terminal = TerminalGuard::new()?;
        let mut events = EventStream::new();

        let (width, height) = terminal.size();
        info!("runtime started ({width}x{height})");

        self.draw(&mut terminal, &app)?;

        loop {
            select! {
                maybe_event = events.next() => {
                    let Some(result) = maybe_event else {
                        return Err(RuntimeError::EventStreamClosed);
                    };
                    let Some(event) = convert_event(result?) else {
                        continue;
                    };
                    match event {
                        Event::Quit => {
                            info!("quit requested");
                            break;
                        }
                        Event::Resize { width, height } => {
                            debug!("resized to {width}x{height}");
                        }
                        _ => {
                            if !app.on_event(&event) {
                                info!("app requested shutdown");
                                break;
                            }
                        }
                    }
                    self.draw(&mut terminal, &app)?;
                }
                _ = wakeup_rx.recv() => {
                    wakeup_rx.drain();
                    self.draw(&mut terminal, &app)?;
                }
            }
        }

        Ok(())
    }

    fn draw<A: App>(&self, terminal: &mut TerminalGuard, app: &A) -> Result<(), RuntimeError> {
        let background = TextStyle::new(self.theme.text, self.theme.background);
        let buffer = terminal.frame()?;
        buffer.clear(background);
        app.render(buffer, &self.theme);
        terminal.flush()?;
        Ok(())
    }
}

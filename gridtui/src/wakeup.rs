//! Wakeup channel for passive rendering.
//!
//! The event loop blocks when idle. Mutating reactive state (or a debounce
//! commit firing) sends a wakeup signal so the loop re-renders. Signals may
//! be dropped: a full channel means a render is already pending.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 16;

/// Sender half of the wakeup channel.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal. Non-blocking; a full or closed channel is fine.
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the wakeup channel.
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for the next wakeup signal.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Consume any buffered signals so a burst collapses into one render.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a new wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

/// An installable sender slot.
///
/// Widgets are constructed before the runtime exists, so they hold one of
/// these; the runtime installs the real sender when it starts.
#[derive(Clone, Debug, Default)]
pub struct WakeupHandle {
    inner: Arc<Mutex<Option<WakeupSender>>>,
}

impl WakeupHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a sender. Replaces any previous one.
    pub fn install(&self, sender: WakeupSender) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(sender);
        }
    }

    /// Send a wakeup signal if a sender is installed.
    pub fn send(&self) {
        if let Ok(guard) = self.inner.lock()
            && let Some(sender) = guard.as_ref()
        {
            sender.send();
        }
    }
}

//! Shutdown coordination for the embedded host.

use tokio::sync::broadcast;

/// Fan-in point for the shell's independent shutdown triggers.
///
/// "All windows closed" and "application quitting" both fire this; the
/// serve loop subscribes once and drains on the first signal. Triggering
/// after shutdown already happened, or with no subscriber listening, is a
/// no-op.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal. Safe to call from any trigger, any number
    /// of times.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

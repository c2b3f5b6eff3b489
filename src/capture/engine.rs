//! Async capture engine
//!
//! Bridges the hook-event channel to downstream consumers: drives the
//! synchronous transcriber and broadcasts translated output.

use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use super::transcriber::Transcriber;
use crate::events::CaptureEvent;
use crate::hook::{CapsLockQuery, HookEvent};

/// The integration layer between a hook binding and output subscribers.
///
/// Owns no threads; it runs until the hook sender side is dropped, which
/// is how capture sessions stop.
pub struct Engine<C> {
    transcriber: Transcriber<C>,
    event_tx: broadcast::Sender<CaptureEvent>,
}

impl<C: CapsLockQuery> Engine<C> {
    /// Create an engine broadcasting on `event_tx`.
    pub fn new(caps_lock: C, event_tx: broadcast::Sender<CaptureEvent>) -> Self {
        Self {
            transcriber: Transcriber::new(caps_lock),
            event_tx,
        }
    }

    /// Run the engine, processing hook events until the channel closes.
    ///
    /// Held-key state is cleared when the hook reports a gap and again
    /// on exit, so no stale modifier leaks into a later session.
    pub async fn run(&mut self, mut hook_rx: mpsc::Receiver<HookEvent>) {
        info!("capture engine started");

        while let Some(event) = hook_rx.recv().await {
            match event {
                HookEvent::Key(transition) => {
                    if let Some(text) = self.transcriber.handle(transition) {
                        // No subscribers is not a fault
                        let _ = self.event_tx.send(CaptureEvent::Output { text });
                    }
                }
                HookEvent::HookLost => {
                    warn!("hook lost, clearing held-key state");
                    self.transcriber.reset();
                    let _ = self.event_tx.send(CaptureEvent::HookLost);
                }
            }
        }

        self.transcriber.reset();
        info!("capture engine stopped");
    }

    /// Read-only view of the underlying transcriber.
    pub fn transcriber(&self) -> &Transcriber<C> {
        &self.transcriber
    }
}

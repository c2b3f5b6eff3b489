//! Output events emitted by the capture engine
//!
//! Provides the structured event types downstream consumers subscribe
//! to: translated text chunks and capture-gap notifications.

use serde::{Deserialize, Serialize};

/// Events broadcast by the capture engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaptureEvent {
    /// A new chunk of translated keystroke text
    Output {
        /// Rendered character, symbol, or bracketed token
        text: String,
    },

    /// The hook reported a gap; held-key state was cleared
    HookLost,
}

impl std::fmt::Display for CaptureEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureEvent::Output { text } => write!(f, "OUTPUT({:?})", text),
            CaptureEvent::HookLost => write!(f, "HOOK_LOST"),
        }
    }
}

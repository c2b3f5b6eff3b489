//! Capture pipeline
//!
//! The synchronous transcription core a hook callback drives, and the
//! async engine that bridges it to broadcast subscribers.

mod engine;
mod transcriber;

pub use engine::Engine;
pub use transcriber::Transcriber;

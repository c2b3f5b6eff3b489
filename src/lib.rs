//! keyscribe: key-state tracking and keystroke-to-text translation
//!
//! Converts raw key transitions delivered by an OS-level hook into a
//! human-readable text stream: printable characters, shifted symbols,
//! and bracketed tokens for non-printable keys (`[ENTER]`,
//! `[BACKSPACE]`, and a `[<KeyName>]` fallback).
//!
//! Scope:
//! - Held-key tracking with auto-repeat suppression
//! - Pure key-to-string translation under shift/caps-lock state
//! - Contracts for the platform hook and caps-lock query collaborators
//! - An async engine bridging a hook channel to broadcast subscribers
//! - NO OS hook installation, persistence, or UI surfaces
//!
//! A platform binding implements [`KeyEventSource`], feeds
//! [`HookEvent`]s into an mpsc channel, and answers [`CapsLockQuery`];
//! the [`Engine`] does the rest. Callers that own their own event loop
//! can drive the synchronous [`Transcriber`] directly:
//!
//! ```
//! use keyscribe::{KeyCode, KeyTransition, Transcriber};
//!
//! let mut transcriber = Transcriber::new(|| false);
//!
//! assert_eq!(
//!     transcriber.handle(KeyTransition::down(KeyCode::ShiftLeft)),
//!     None,
//! );
//! assert_eq!(
//!     transcriber.handle(KeyTransition::down(KeyCode::A)).as_deref(),
//!     Some("A"),
//! );
//! ```

pub mod capture;
pub mod config;
pub mod events;
pub mod hook;
pub mod keys;
pub mod translate;

pub use capture::{Engine, Transcriber};
pub use config::CaptureConfig;
pub use events::CaptureEvent;
pub use hook::{CapsLockQuery, HookError, HookEvent, KeyEventSource};
pub use keys::{Direction, KeyCode, KeyStateTracker, KeyTransition};
pub use translate::translate;

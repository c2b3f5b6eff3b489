//! External collaborator contracts
//!
//! The OS-level hook that observes raw key transitions and the query for
//! caps-lock toggle state are platform bindings this crate does not
//! ship. This module defines the interfaces such bindings must provide
//! to plug into the capture engine.

use serde::{Deserialize, Serialize};

use crate::keys::KeyTransition;

/// Events delivered from a hook binding into the capture engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HookEvent {
    /// A validated key transition
    Key(KeyTransition),
    /// The OS disabled or tore down the hook; up-events may have been
    /// missed, so held-key state must be discarded
    HookLost,
}

/// Errors surfaced by a hook binding.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("key event source is already running")]
    AlreadyRunning,

    #[error("hook unavailable: {reason}")]
    Unavailable {
        /// Registration failure or permission denial detail from the OS
        reason: String,
    },

    #[error("failed to spawn hook thread: {0}")]
    ThreadSpawn(String),

    #[error("hook event channel closed")]
    ChannelClosed,
}

/// A source of raw key transitions, typically an OS-wide hook.
///
/// Implementations are constructed with an `mpsc::Sender<HookEvent>` and
/// deliver validated transitions on it from whatever callback path the
/// platform provides. `start` must fail with
/// [`HookError::Unavailable`] when the OS refuses the registration
/// rather than silently degrading.
pub trait KeyEventSource {
    /// Begin delivering events.
    fn start(&self) -> Result<(), HookError>;

    /// Stop delivering events. Safe to call at any time.
    fn stop(&self);

    /// Whether the source is currently delivering events.
    fn is_running(&self) -> bool;
}

/// Query for the caps-lock toggle state, answered by the platform.
///
/// Consulted once per translated press, so a toggle takes effect on the
/// very next keystroke.
pub trait CapsLockQuery {
    /// Whether caps lock is currently toggled on.
    fn is_caps_lock_on(&self) -> bool;
}

/// Closures satisfy the query directly, which also keeps test fixtures
/// trivial.
impl<F> CapsLockQuery for F
where
    F: Fn() -> bool,
{
    fn is_caps_lock_on(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyCode;

    #[test]
    fn test_closure_implements_caps_lock_query() {
        let always_on = || true;
        assert!(always_on.is_caps_lock_on());

        let always_off = || false;
        assert!(!always_off.is_caps_lock_on());
    }

    #[test]
    fn test_hook_event_serialization() {
        let event = HookEvent::Key(KeyTransition::down(KeyCode::A));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"key\""));
        assert!(json.contains("\"A\""));

        let back: HookEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_hook_lost_deserialization() {
        let json = r#"{"type":"hook_lost"}"#;
        let event: HookEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, HookEvent::HookLost));
    }

    #[test]
    fn test_unavailable_error_message() {
        let err = HookError::Unavailable {
            reason: "accessibility permission denied".to_string(),
        };
        assert!(err.to_string().contains("hook unavailable"));
        assert!(err.to_string().contains("permission denied"));
    }
}

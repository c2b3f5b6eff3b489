//! Synchronous per-transition capture pipeline
//!
//! The piece a hook callback drives directly. Hook callbacks are
//! latency-sensitive, so every path here is non-blocking: no I/O, no
//! locks, at most one small string allocation per emitted keystroke.

use tracing::debug;

use crate::hook::CapsLockQuery;
use crate::keys::{Direction, KeyStateTracker, KeyTransition};
use crate::translate::translate;

/// Turns raw key transitions into output text.
///
/// Deduplicates OS auto-repeat through the held-key tracker and
/// translates genuine presses under the modifier state sampled at that
/// instant: shift from the tracker, caps lock from the injected query.
pub struct Transcriber<C> {
    tracker: KeyStateTracker,
    caps_lock: C,
}

impl<C: CapsLockQuery> Transcriber<C> {
    /// Create a transcriber with no keys held.
    pub fn new(caps_lock: C) -> Self {
        Self {
            tracker: KeyStateTracker::new(),
            caps_lock,
        }
    }

    /// Process one raw transition, returning the text to emit, if any.
    ///
    /// Down transitions for already-held keys are auto-repeat and return
    /// `None` without touching state. Up transitions only update the
    /// tracker.
    pub fn handle(&mut self, transition: KeyTransition) -> Option<String> {
        match transition.direction {
            Direction::Down => {
                if !self.tracker.key_down(transition.code) {
                    debug!(code = ?transition.code, "auto-repeat suppressed");
                    return None;
                }

                let shift = self.tracker.shift_held();
                let caps_lock = self.caps_lock.is_caps_lock_on();
                let output = translate(transition.code, shift, caps_lock);

                debug!(
                    code = ?transition.code,
                    shift,
                    caps_lock,
                    emitted = output.is_some(),
                    "key press translated"
                );
                output
            }
            Direction::Up => {
                self.tracker.key_up(transition.code);
                None
            }
        }
    }

    /// Forget all held keys. Safe to call at any time; used when capture
    /// stops or the hook reports a gap.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Read-only view of the held-key tracker.
    pub fn tracker(&self) -> &KeyStateTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::keys::KeyCode;

    fn caps_off() -> impl Fn() -> bool {
        || false
    }

    #[test]
    fn test_repeat_suppressed_then_released() {
        let mut t = Transcriber::new(caps_off());
        assert_eq!(t.handle(KeyTransition::down(KeyCode::A)).as_deref(), Some("a"));
        assert_eq!(t.handle(KeyTransition::down(KeyCode::A)), None);

        t.handle(KeyTransition::up(KeyCode::A));
        assert!(!t.tracker().is_held(KeyCode::A));
        assert_eq!(t.handle(KeyTransition::down(KeyCode::A)).as_deref(), Some("a"));
    }

    #[test]
    fn test_shift_sampled_at_press_time() {
        let mut t = Transcriber::new(caps_off());

        // Sequence: down A, down A (repeat), up A, down shift, down B,
        // up B, up shift. Exactly "a" then "B" is emitted.
        let mut emitted = Vec::new();
        for transition in [
            KeyTransition::down(KeyCode::A),
            KeyTransition::down(KeyCode::A),
            KeyTransition::up(KeyCode::A),
            KeyTransition::down(KeyCode::ShiftLeft),
            KeyTransition::down(KeyCode::B),
            KeyTransition::up(KeyCode::B),
            KeyTransition::up(KeyCode::ShiftLeft),
        ] {
            if let Some(text) = t.handle(transition) {
                emitted.push(text);
            }
        }

        assert_eq!(emitted, vec!["a".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_caps_lock_queried_per_press() {
        let caps = Rc::new(Cell::new(false));
        let query = {
            let caps = Rc::clone(&caps);
            move || caps.get()
        };
        let mut t = Transcriber::new(query);

        assert_eq!(t.handle(KeyTransition::down(KeyCode::A)).as_deref(), Some("a"));
        t.handle(KeyTransition::up(KeyCode::A));

        // Toggle takes effect on the very next press
        caps.set(true);
        assert_eq!(t.handle(KeyTransition::down(KeyCode::A)).as_deref(), Some("A"));
        t.handle(KeyTransition::up(KeyCode::A));

        // Shift under caps lock cancels for letters
        t.handle(KeyTransition::down(KeyCode::ShiftLeft));
        assert_eq!(t.handle(KeyTransition::down(KeyCode::A)).as_deref(), Some("a"));
    }

    #[test]
    fn test_modifier_presses_emit_nothing() {
        let mut t = Transcriber::new(caps_off());
        assert_eq!(t.handle(KeyTransition::down(KeyCode::ShiftLeft)), None);
        assert_eq!(t.handle(KeyTransition::down(KeyCode::ControlLeft)), None);
        assert_eq!(t.handle(KeyTransition::down(KeyCode::CapsLock)), None);
        // They are still tracked as held
        assert!(t.tracker().is_held(KeyCode::ShiftLeft));
        assert_eq!(t.tracker().held_count(), 3);
    }

    #[test]
    fn test_reset_drops_phantom_modifiers() {
        let mut t = Transcriber::new(caps_off());
        t.handle(KeyTransition::down(KeyCode::ShiftLeft));
        t.reset();

        // Shift held before the reset must not leak into this press
        assert_eq!(t.handle(KeyTransition::down(KeyCode::B)).as_deref(), Some("b"));
        assert_eq!(t.tracker().held_count(), 1);
    }
}

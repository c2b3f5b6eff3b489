//! Held-key state tracking
//!
//! Maintains the set of keys currently in the down state so the capture
//! pipeline can suppress OS auto-repeat and read modifier state at
//! translation time.

use std::collections::HashSet;

use super::code::KeyCode;

/// Tracks which keys are currently held down.
///
/// Membership exactly reflects the down/up transition history since the
/// last [`reset`](Self::reset): a key is present iff its most recent
/// transition was down without an intervening up. Single-threaded by
/// contract; cross-thread handoff belongs to the consumer.
#[derive(Debug, Default)]
pub struct KeyStateTracker {
    held: HashSet<KeyCode>,
}

impl KeyStateTracker {
    /// Create a tracker with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a down transition.
    ///
    /// Returns `true` for a genuine new press, `false` (with no state
    /// change) when the key is already held, meaning the OS generated
    /// an auto-repeat that must not be re-emitted. Unknown codes are
    /// tracked like any other.
    pub fn key_down(&mut self, code: KeyCode) -> bool {
        self.held.insert(code)
    }

    /// Record an up transition. No-op if the key was not held.
    pub fn key_up(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    /// Forget all held keys. Called when capture stops so stale modifier
    /// state cannot leak into a later session. Safe to call at any time.
    pub fn reset(&mut self) {
        self.held.clear();
    }

    /// Whether `code` is currently held.
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Whether either shift key is currently held.
    pub fn shift_held(&self) -> bool {
        self.is_held(KeyCode::ShiftLeft) || self.is_held(KeyCode::ShiftRight)
    }

    /// Number of keys currently held.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

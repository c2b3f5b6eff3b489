//! Key identifiers and held-key state
//!
//! Defines the key code enumeration shared across the crate and the
//! tracker that maintains the set of currently held keys.

mod code;
mod tracker;

pub use code::{Direction, KeyCode, KeyTransition};
pub use tracker::KeyStateTracker;

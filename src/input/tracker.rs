//! Key-event reducers over [`KeyState`].
//!
//! These are the only functions that mutate held-key state. Both are safe to
//! call with every raw event the host delivers, including auto-repeats.

use super::key_state::KeyState;
use super::logical_key::LogicalKey;

/// What a raw key event did to the tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    /// Not one of the tracked keys.
    Ignored,
    /// First press after a release.
    Pressed(LogicalKey),
    /// Press while already held (auto-repeat).
    Repeat(LogicalKey),
    Released(LogicalKey),
    /// Release of a key that was not held.
    Stale(LogicalKey),
}

impl KeyTransition {
    /// The key whose rising edge this is, if any.
    pub fn rising_edge(self) -> Option<LogicalKey> {
        match self {
            Self::Pressed(key) => Some(key),
            _ => None,
        }
    }

    /// Whether the held-key state changed.
    pub fn changed_state(self) -> bool {
        matches!(self, Self::Pressed(_) | Self::Released(_))
    }
}

/// Result of feeding one raw event through the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    pub transition: KeyTransition,
    /// The host should suppress its default action (e.g. page scroll).
    pub suppress_default: bool,
}

impl KeyResponse {
    fn new(transition: KeyTransition, key: Option<LogicalKey>) -> Self {
        Self {
            transition,
            suppress_default: key.is_some_and(LogicalKey::is_directional),
        }
    }
}

/// Apply a key-down event.
pub fn key_down(state: &mut KeyState, name: &str, time_us: u64) -> KeyResponse {
    let key = LogicalKey::from_key_name(name);
    let transition = match key {
        None => KeyTransition::Ignored,
        Some(key) if state.press(key, time_us) => KeyTransition::Pressed(key),
        Some(key) => KeyTransition::Repeat(key),
    };
    KeyResponse::new(transition, key)
}

/// Apply a key-up event.
pub fn key_up(state: &mut KeyState, name: &str, time_us: u64) -> KeyResponse {
    let key = LogicalKey::from_key_name(name);
    let transition = match key {
        None => KeyTransition::Ignored,
        Some(key) if state.release(key, time_us) => KeyTransition::Released(key),
        Some(key) => KeyTransition::Stale(key),
    };
    KeyResponse::new(transition, key)
}

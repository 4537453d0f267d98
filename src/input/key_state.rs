use super::logical_key::LogicalKey;

/// Pressed/released state of a single logical key with microsecond timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyLatch {
    /// Whether the key is currently held down.
    pub pressed: bool,
    /// Timestamp of the last rising edge (microseconds).
    pub press_time_us: u64,
    /// Timestamp of the last release (microseconds).
    pub release_time_us: u64,
}

impl KeyLatch {
    /// Latch a press. Returns true only on the rising edge; repeats while
    /// held leave the latch untouched.
    pub fn on_press(&mut self, time_us: u64) -> bool {
        if self.pressed {
            return false;
        }
        self.pressed = true;
        self.press_time_us = time_us;
        true
    }

    /// Latch a release. Returns false if the key was not held.
    pub fn on_release(&mut self, time_us: u64) -> bool {
        if !self.pressed {
            return false;
        }
        self.pressed = false;
        self.release_time_us = time_us;
        true
    }

    /// Length of the last completed press. None while the key is held.
    pub fn held_us(&self) -> Option<u64> {
        if self.pressed {
            return None;
        }
        Some(self.release_time_us.saturating_sub(self.press_time_us))
    }
}

/// Held state for every [`LogicalKey`].
///
/// Only mutated by key-down/key-up handling; never reset implicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    latches: [KeyLatch; LogicalKey::COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given keys held (pressed at t=0).
    pub fn with_pressed(keys: &[LogicalKey]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key, 0);
        }
        state
    }

    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.latches[key.index()].pressed
    }

    pub fn latch(&self, key: LogicalKey) -> &KeyLatch {
        &self.latches[key.index()]
    }

    /// Returns true on the rising edge.
    pub fn press(&mut self, key: LogicalKey, time_us: u64) -> bool {
        self.latches[key.index()].on_press(time_us)
    }

    /// Returns true if the key was held.
    pub fn release(&mut self, key: LogicalKey, time_us: u64) -> bool {
        self.latches[key.index()].on_release(time_us)
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = LogicalKey> + '_ {
        LogicalKey::ALL
            .into_iter()
            .filter(move |&key| self.is_pressed(key))
    }

    pub fn octave_shift(&self) -> bool {
        self.is_pressed(LogicalKey::OctaveShift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_default_is_released() {
        let latch = KeyLatch::default();
        assert!(!latch.pressed);
        assert_eq!(latch.press_time_us, 0);
        assert_eq!(latch.release_time_us, 0);
    }

    #[test]
    fn latch_rising_edge_only_once() {
        let mut latch = KeyLatch::default();
        assert!(latch.on_press(1000));
        assert!(!latch.on_press(2000));
        assert_eq!(latch.press_time_us, 1000);
    }

    #[test]
    fn latch_release_of_idle_key_is_ignored() {
        let mut latch = KeyLatch::default();
        assert!(!latch.on_release(500));
        assert_eq!(latch, KeyLatch::default());
    }

    #[test]
    fn latch_press_release_cycle() {
        let mut latch = KeyLatch::default();
        latch.on_press(1000);
        assert!(latch.on_release(2000));
        assert!(!latch.pressed);
        assert_eq!(latch.release_time_us, 2000);
        assert!(latch.on_press(3000));
        assert_eq!(latch.press_time_us, 3000);
    }

    #[test]
    fn latch_held_duration() {
        let mut latch = KeyLatch::default();
        latch.on_press(1_000);
        assert_eq!(latch.held_us(), None);
        latch.on_release(251_000);
        assert_eq!(latch.held_us(), Some(250_000));
    }

    #[test]
    fn keys_are_independent() {
        let mut state = KeyState::new();
        state.press(LogicalKey::Right, 10);
        state.press(LogicalKey::OctaveShift, 20);

        assert!(state.is_pressed(LogicalKey::Right));
        assert!(state.octave_shift());
        assert!(!state.is_pressed(LogicalKey::Left));
        assert_eq!(
            state.pressed_keys().collect::<Vec<_>>(),
            vec![LogicalKey::Right, LogicalKey::OctaveShift]
        );
    }

    #[test]
    fn with_pressed_builds_held_state() {
        let state = KeyState::with_pressed(&[LogicalKey::Up, LogicalKey::Left]);
        assert!(state.is_pressed(LogicalKey::Up));
        assert!(state.is_pressed(LogicalKey::Left));
        assert_eq!(state.pressed_keys().count(), 2);
    }
}

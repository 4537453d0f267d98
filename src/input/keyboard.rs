use macroquad::prelude::{KeyCode, get_keys_pressed, get_keys_released, is_key_down};

use crate::traits::input::{KeyEventSource, RawKeyEvent};
use crate::traits::time::{SystemTimeProvider, TimeProvider};

/// Keys forwarded from the window. Everything else never reaches the tracker.
const FORWARDED_KEYS: [KeyCode; 7] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::C,
    KeyCode::Z,
    KeyCode::K,
];

/// DOM-style key name for a macroquad key code.
pub fn key_name(key: KeyCode) -> Option<&'static str> {
    match key {
        KeyCode::Up => Some("ArrowUp"),
        KeyCode::Down => Some("ArrowDown"),
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::C => Some("c"),
        KeyCode::Z => Some("z"),
        KeyCode::K => Some("k"),
        _ => None,
    }
}

/// Keyboard event source reading macroquad's per-frame key sets.
pub struct MacroquadKeyboard {
    clock: SystemTimeProvider,
}

impl MacroquadKeyboard {
    pub fn new() -> Self {
        Self {
            clock: SystemTimeProvider::new(),
        }
    }

    pub fn now_us(&self) -> u64 {
        self.clock.now_us()
    }
}

impl Default for MacroquadKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Events for one key seen during a single frame.
///
/// A key both pressed and released within the frame ends in the state it is
/// physically in: up then down while still held, down then up otherwise.
fn frame_events(
    name: &'static str,
    pressed: bool,
    released: bool,
    held: bool,
    now: u64,
) -> Vec<RawKeyEvent> {
    match (pressed, released) {
        (true, true) if held => vec![RawKeyEvent::up(name, now), RawKeyEvent::down(name, now)],
        (true, true) => vec![RawKeyEvent::down(name, now), RawKeyEvent::up(name, now)],
        (true, false) => vec![RawKeyEvent::down(name, now)],
        (false, true) => vec![RawKeyEvent::up(name, now)],
        (false, false) => Vec::new(),
    }
}

impl KeyEventSource for MacroquadKeyboard {
    fn poll_events(&mut self) -> Vec<RawKeyEvent> {
        let now = self.clock.now_us();
        let pressed = get_keys_pressed();
        let released = get_keys_released();

        // Arrows and C come before Z and K, so a chord landing in one frame
        // plays at the pitch it spells.
        FORWARDED_KEYS
            .iter()
            .filter_map(|&key| key_name(key).map(|name| (key, name)))
            .flat_map(|(key, name)| {
                frame_events(
                    name,
                    pressed.contains(&key),
                    released.contains(&key),
                    is_key_down(key),
                    now,
                )
            })
            .collect()
    }
}

use std::collections::VecDeque;

/// A raw keyboard event as delivered by the windowing layer.
///
/// `key` uses DOM-style key names (`"ArrowRight"`, `"z"`, `"Z"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: String,
    /// true = pressed (including auto-repeat), false = released.
    pub pressed: bool,
    /// Timestamp in microseconds.
    pub time_us: u64,
}

impl RawKeyEvent {
    pub fn down(key: impl Into<String>, time_us: u64) -> Self {
        Self {
            key: key.into(),
            pressed: true,
            time_us,
        }
    }

    pub fn up(key: impl Into<String>, time_us: u64) -> Self {
        Self {
            key: key.into(),
            pressed: false,
            time_us,
        }
    }
}

/// Abstraction over keyboard event sources.
/// Implementations: MacroquadKeyboard (window), ScriptedKeys (testing).
pub trait KeyEventSource {
    /// Drain key events received since the last call, oldest first.
    fn poll_events(&mut self) -> Vec<RawKeyEvent>;
}

/// Replays a fixed list of key events, one batch per poll.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    batches: VecDeque<Vec<RawKeyEvent>>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch to be returned by a later `poll_events` call.
    pub fn push_batch(&mut self, events: Vec<RawKeyEvent>) {
        self.batches.push_back(events);
    }

    pub fn is_exhausted(&self) -> bool {
        self.batches.is_empty()
    }
}

impl KeyEventSource for ScriptedKeys {
    fn poll_events(&mut self) -> Vec<RawKeyEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}

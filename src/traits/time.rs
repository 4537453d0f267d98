/// Abstraction over time sources.
/// Implementations: SystemTimeProvider (production), MockTimeProvider (testing).
pub trait TimeProvider {
    /// Current time in microseconds from an arbitrary epoch.
    fn now_us(&self) -> u64;
}

/// Converts milliseconds to the microsecond timeline used by [`TimeProvider`].
pub const fn ms_to_us(ms: u64) -> u64 {
    ms * 1_000
}

/// Monotonic clock anchored at construction.
pub struct SystemTimeProvider {
    start: std::time::Instant,
}

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/// Manually driven clock for deterministic tests.
pub struct MockTimeProvider {
    current_us: std::cell::Cell<u64>,
}

impl MockTimeProvider {
    pub fn new() -> Self {
        Self {
            current_us: std::cell::Cell::new(0),
        }
    }

    pub fn set_time(&self, us: u64) {
        self.current_us.set(us);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.current_us.set(self.current_us.get() + ms_to_us(ms));
    }
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}

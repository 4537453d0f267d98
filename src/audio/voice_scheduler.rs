use crate::traits::audio::VoiceId;
use crate::traits::time::ms_to_us;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRelease {
    voice: VoiceId,
    due_us: u64,
}

/// Release deadlines for transient voices.
///
/// Deadlines are fixed when a voice starts and always fire; there is no
/// cancellation.
#[derive(Debug, Default)]
pub struct VoiceScheduler {
    pending: Vec<PendingRelease>,
}

impl VoiceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `voice` for release `lifetime_ms` after `now_us`.
    /// Returns the deadline.
    pub fn schedule(&mut self, voice: VoiceId, now_us: u64, lifetime_ms: u64) -> u64 {
        let due_us = now_us.saturating_add(ms_to_us(lifetime_ms));
        // Kept sorted by deadline; equal deadlines keep insertion order.
        let at = self.pending.partition_point(|p| p.due_us <= due_us);
        self.pending.insert(at, PendingRelease { voice, due_us });
        due_us
    }

    /// Remove and return every voice whose deadline is at or before `now_us`,
    /// earliest first.
    pub fn drain_due(&mut self, now_us: u64) -> Vec<VoiceId> {
        let due = self.pending.partition_point(|p| p.due_us <= now_us);
        self.pending.drain(..due).map(|p| p.voice).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.first().map(|p| p.due_us)
    }

    pub fn is_scheduled(&self, voice: VoiceId) -> bool {
        self.pending.iter().any(|p| p.voice == voice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_deadline() {
        let mut scheduler = VoiceScheduler::new();
        let due = scheduler.schedule(VoiceId(1), 0, 1500);
        assert_eq!(due, 1_500_000);
        assert!(scheduler.drain_due(1_499_999).is_empty());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn due_exactly_at_deadline() {
        let mut scheduler = VoiceScheduler::new();
        scheduler.schedule(VoiceId(1), 1_000, 1500);
        assert_eq!(scheduler.drain_due(1_501_000), vec![VoiceId(1)]);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.drain_due(u64::MAX).is_empty());
    }

    #[test]
    fn drains_in_deadline_order() {
        let mut scheduler = VoiceScheduler::new();
        scheduler.schedule(VoiceId(1), 0, 3000);
        scheduler.schedule(VoiceId(2), 0, 1500);
        scheduler.schedule(VoiceId(3), 100_000, 1500);

        assert_eq!(scheduler.next_deadline(), Some(1_500_000));
        assert_eq!(scheduler.drain_due(2_000_000), vec![VoiceId(2), VoiceId(3)]);
        assert!(scheduler.is_scheduled(VoiceId(1)));
        assert_eq!(scheduler.drain_due(3_000_000), vec![VoiceId(1)]);
    }

    #[test]
    fn equal_deadlines_keep_start_order() {
        let mut scheduler = VoiceScheduler::new();
        scheduler.schedule(VoiceId(5), 0, 1500);
        scheduler.schedule(VoiceId(4), 0, 1500);
        assert_eq!(scheduler.drain_due(1_500_000), vec![VoiceId(5), VoiceId(4)]);
    }
}

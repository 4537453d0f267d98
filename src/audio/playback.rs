use tracing::{debug, warn};

use super::audio_config::AudioConfig;
use super::sample_loader::SampleSlot;
use super::voice_scheduler::VoiceScheduler;
use crate::traits::audio::{AudioBackend, VoiceId};

/// Which trigger key started a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// The pitched organ note.
    Main,
    /// The unmodified easter-egg clip.
    EasterEgg,
}

/// A started voice and its release deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    pub id: VoiceId,
    pub kind: TriggerKind,
    pub rate: f64,
    pub started_us: u64,
    pub release_due_us: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerOutcome {
    Started(Voice),
    /// Sample not ready; the press is dropped.
    NotLoaded(TriggerKind),
    /// Backend refused to start the voice; the press is dropped.
    BackendError(TriggerKind),
}

impl TriggerOutcome {
    pub fn voice(&self) -> Option<&Voice> {
        match self {
            Self::Started(voice) => Some(voice),
            _ => None,
        }
    }
}

/// Starts transient voices and schedules their release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTrigger {
    main_lifetime_ms: u64,
    easter_egg_lifetime_ms: u64,
}

impl Default for PlaybackTrigger {
    fn default() -> Self {
        Self::from_config(&AudioConfig::default())
    }
}

impl PlaybackTrigger {
    pub fn from_config(config: &AudioConfig) -> Self {
        Self {
            main_lifetime_ms: config.main_voice_lifetime_ms,
            easter_egg_lifetime_ms: config.easter_egg_voice_lifetime_ms,
        }
    }

    pub fn lifetime_ms(&self, kind: TriggerKind) -> u64 {
        match kind {
            TriggerKind::Main => self.main_lifetime_ms,
            TriggerKind::EasterEgg => self.easter_egg_lifetime_ms,
        }
    }

    /// Start a voice of `slot`'s sample at `rate` and schedule its release.
    ///
    /// Never fails: an unready sample or a backend error drops the press.
    pub fn fire<A: AudioBackend>(
        &self,
        kind: TriggerKind,
        rate: f64,
        slot: &SampleSlot,
        backend: &mut A,
        scheduler: &mut VoiceScheduler,
        now_us: u64,
    ) -> TriggerOutcome {
        let Some(sample) = slot.sample() else {
            debug!("{} sample not loaded yet, dropping {kind:?} trigger", slot.label());
            return TriggerOutcome::NotLoaded(kind);
        };

        let id = match backend.start_voice(sample, rate) {
            Ok(id) => id,
            Err(e) => {
                warn!("failed to start {kind:?} voice: {e:#}");
                return TriggerOutcome::BackendError(kind);
            }
        };

        let release_due_us = scheduler.schedule(id, now_us, self.lifetime_ms(kind));
        debug!("{kind:?} voice {} started at rate {rate:.4}", id.0);
        TriggerOutcome::Started(Voice {
            id,
            kind,
            rate,
            started_us: now_us,
            release_due_us,
        })
    }
}

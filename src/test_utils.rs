//! Test doubles shared by unit tests.

use anyhow::{Result, bail};

use crate::traits::audio::{AudioBackend, SampleId, VoiceId};

/// Recording audio backend.
#[derive(Debug, Default)]
pub struct MockAudio {
    next_id: u64,
    /// (byte length, extension) of every sample decoded from memory.
    pub loaded: Vec<(usize, String)>,
    /// (sample, rate) of every started voice.
    pub started: Vec<(SampleId, f64)>,
    pub released_voices: Vec<VoiceId>,
    pub released_samples: Vec<SampleId>,
    pub volume: Option<f32>,
    pub fail_loads: bool,
    pub fail_voices: bool,
    /// Sample whose release fails.
    pub fail_sample_release: Option<SampleId>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AudioBackend for MockAudio {
    fn load_sample_from_memory(&mut self, data: &[u8], ext: &str) -> Result<SampleId> {
        if self.fail_loads {
            bail!("mock decode failure");
        }
        self.loaded.push((data.len(), ext.to_string()));
        Ok(SampleId(self.alloc_id()))
    }

    fn start_voice(&mut self, sample: SampleId, rate: f64) -> Result<VoiceId> {
        if self.fail_voices {
            bail!("mock voice failure");
        }
        self.started.push((sample, rate));
        Ok(VoiceId(self.alloc_id()))
    }

    fn release_voice(&mut self, voice: VoiceId) -> Result<()> {
        self.released_voices.push(voice);
        Ok(())
    }

    fn release_sample(&mut self, sample: SampleId) -> Result<()> {
        if self.fail_sample_release == Some(sample) {
            bail!("mock sample release failure");
        }
        self.released_samples.push(sample);
        Ok(())
    }

    fn set_master_volume(&mut self, volume: f32) -> Result<()> {
        self.volume = Some(volume);
        Ok(())
    }
}

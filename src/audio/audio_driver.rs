use std::collections::HashMap;

use anyhow::{Result, anyhow};
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, Decibels, DefaultBackend, PlaybackRate, Tween};

use crate::traits::audio::{AudioBackend, SampleId, VoiceId};

/// Audio driver backed by kira.
///
/// Sample data is reference-counted inside kira, so every voice clones the
/// shared data cheaply and gets its own playback rate.
pub struct AudioDriver {
    manager: AudioManager<DefaultBackend>,
    /// Decoded samples keyed by SampleId.
    samples: HashMap<u64, StaticSoundData>,
    /// Live voices keyed by VoiceId.
    voices: HashMap<u64, StaticSoundHandle>,
    next_id: u64,
}

impl AudioDriver {
    /// Open the default output device.
    pub fn new() -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow!("Failed to create audio manager: {e}"))?;
        Ok(Self {
            manager,
            samples: HashMap::new(),
            voices: HashMap::new(),
            next_id: 1,
        })
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Linear amplitude to decibels, with 0.0 mapped to silence.
fn amplitude_to_decibels(volume: f32) -> Decibels {
    if volume <= 0.0 {
        Decibels::SILENCE
    } else {
        Decibels(20.0 * volume.min(1.0).log10())
    }
}

impl AudioBackend for AudioDriver {
    fn load_sample_from_memory(&mut self, data: &[u8], ext: &str) -> Result<SampleId> {
        let cursor = std::io::Cursor::new(data.to_vec());
        let sample = match ext.to_lowercase().as_str() {
            "wav" | "wave" | "ogg" | "mp3" | "flac" => StaticSoundData::from_cursor(cursor),
            _ => return Err(anyhow!("Unsupported audio format: {ext}")),
        }
        .map_err(|e| anyhow!("Failed to decode sample ({ext}): {e}"))?;

        let id = self.alloc_id();
        self.samples.insert(id, sample);
        Ok(SampleId(id))
    }

    fn start_voice(&mut self, sample: SampleId, rate: f64) -> Result<VoiceId> {
        let data = self
            .samples
            .get(&sample.0)
            .ok_or_else(|| anyhow!("Sample not found: {:?}", sample))?
            .clone()
            .playback_rate(PlaybackRate(rate));
        let handle = self
            .manager
            .play(data)
            .map_err(|e| anyhow!("Failed to start voice: {e}"))?;
        let id = self.alloc_id();
        self.voices.insert(id, handle);
        Ok(VoiceId(id))
    }

    fn release_voice(&mut self, voice: VoiceId) -> Result<()> {
        if let Some(mut handle) = self.voices.remove(&voice.0) {
            handle.stop(Tween::default());
        }
        Ok(())
    }

    fn release_sample(&mut self, sample: SampleId) -> Result<()> {
        self.samples.remove(&sample.0);
        Ok(())
    }

    fn set_master_volume(&mut self, volume: f32) -> Result<()> {
        self.manager
            .main_track()
            .set_volume(amplitude_to_decibels(volume), Tween::default());
        Ok(())
    }
}

use anyhow::Result;

/// Handle for a decoded sample held by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleId(pub u64);

/// Handle for one transient playback instance of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceId(pub u64);

/// Abstraction over audio backends.
/// Implementations: AudioDriver (kira), MockAudio (testing).
///
/// Samples are immutable once loaded and may back any number of voices.
/// Voices are independent: starting one never stops another.
pub trait AudioBackend {
    /// Decode an encoded sample (`ext` names its container format).
    fn load_sample_from_memory(&mut self, data: &[u8], ext: &str) -> Result<SampleId>;

    /// Start a new voice of `sample` at `rate` (1.0 = recorded pitch).
    fn start_voice(&mut self, sample: SampleId, rate: f64) -> Result<VoiceId>;

    /// Stop a voice and free its resources. Releasing an unknown or
    /// already-released voice is a no-op.
    fn release_voice(&mut self, voice: VoiceId) -> Result<()>;

    /// Free a loaded sample. Voices already playing it are unaffected.
    fn release_sample(&mut self, sample: SampleId) -> Result<()>;

    /// Set output volume (0.0..=1.0).
    fn set_master_volume(&mut self, volume: f32) -> Result<()>;
}

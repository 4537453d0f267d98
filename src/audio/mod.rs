//! Audio subsystem using kira.
//!
//! This module provides:
//! - [`AudioDriver`]: Sample and voice management with kira
//! - [`SampleLoadTask`] / [`SampleSlot`]: Fire-once background sample loading
//! - [`VoiceScheduler`]: Fixed-deadline voice release
//! - [`PlaybackTrigger`]: Starts transient voices from trigger keys
//! - [`AudioConfig`]: Configuration for audio settings

mod audio_config;
mod audio_driver;
mod playback;
mod sample_loader;
mod voice_scheduler;

pub use audio_config::AudioConfig;
pub use audio_driver::AudioDriver;
pub use playback::{PlaybackTrigger, TriggerKind, TriggerOutcome, Voice};
pub use sample_loader::{SampleLoadTask, SampleSlot, SampleStatus};
pub use voice_scheduler::VoiceScheduler;

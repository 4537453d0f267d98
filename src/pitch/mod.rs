//! Arrow-key combination to playback-rate mapping.
//!
//! - [`resolve`]: held arrows to [`Direction`]
//! - [`pitch`]: direction and octave modifier to a playback-rate multiplier

mod direction;
mod interval;

pub use direction::{Direction, resolve};
pub use interval::{OCTAVE, interval, pitch, semitone_offset};

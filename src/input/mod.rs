//! Keyboard input tracking.
//!
//! This module provides:
//! - [`LogicalKey`]: The seven keys the organ reacts to
//! - [`KeyState`]: Held state for every logical key
//! - [`tracker`]: Rising-edge key-down/key-up reducers
//! - [`MacroquadKeyboard`]: Window keyboard event source

mod key_state;
mod keyboard;
mod logical_key;
pub mod tracker;

pub use key_state::{KeyLatch, KeyState};
pub use keyboard::{MacroquadKeyboard, key_name};
pub use logical_key::LogicalKey;
pub use tracker::{KeyResponse, KeyTransition};

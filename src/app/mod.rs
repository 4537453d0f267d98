mod controller;

pub use controller::{KeyOutcome, OrganController};

//! Utilities for simprobe: hex formatting and retry timing helpers.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;

// simprobe/src/protocol/mod.rs

pub mod apdu;
pub mod commands;
pub mod parser;

pub use crate::types::{Status, classify};
pub use apdu::{CommandApdu, ResponseApdu};
pub use commands::*;

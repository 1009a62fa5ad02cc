// simprobe/src/lib.rs

//! simprobe
//!
//! Pure Rust APDU prober for SIM/eUICC cards: application discovery,
//! file reads and SIM Toolkit menu decoding over an injected card session.

pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod scan;
pub mod session;
pub mod stk;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

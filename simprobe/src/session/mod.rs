// simprobe/src/session/mod.rs

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use mock::MockSession;
#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscSession;
pub use traits::{CardSession, ProtocolPreference};

#![cfg(feature = "pcsc")]

//! Shared helpers for tests against a real reader.
//!
//! Opening returns `Ok(None)` when no reader or card is present (CI and
//! similar environments), so the tests pass without hardware.

use simprobe::session::{PcscSession, ProtocolPreference};
use simprobe::{Error, Result};

/// Open the first reader with protocol autodetection.
///
/// - Ok(Some(session)) : reader present and a card answered
/// - Ok(None) : no reader or no card
/// - Err(e) : anything else
pub fn open_first_session() -> Result<Option<PcscSession>> {
    match PcscSession::open_first(ProtocolPreference::Auto) {
        Ok(session) => Ok(Some(session)),
        Err(Error::CardNotReachable(_)) => Ok(None),
        Err(Error::Pcsc(
            pcsc::Error::NoReadersAvailable
            | pcsc::Error::NoSmartcard
            | pcsc::Error::RemovedCard
            | pcsc::Error::NoService,
        )) => Ok(None),
        Err(e) => Err(e),
    }
}

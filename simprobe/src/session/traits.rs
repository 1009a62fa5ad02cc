// simprobe/src/session/traits.rs

use crate::Result;
use crate::protocol::ResponseApdu;

/// Transmission protocol requested when (re)connecting to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtocolPreference {
    /// Let the reader negotiate, falling back to T=0 then T=1
    #[default]
    Auto,
    T0,
    T1,
}

/// CardSession abstracts the reader away from the APDU logic.
///
/// Every operation in this crate takes `&mut` session, so one session is
/// never driven from two places at once. The card's "currently selected
/// file" is state owned by the card and changed by every SELECT.
pub trait CardSession {
    /// Send one command APDU and return the response data plus status word.
    fn transmit(&mut self, command: &[u8]) -> Result<ResponseApdu>;

    /// Re-establish the session with the given protocol preference. Default
    /// implementation does nothing so scripted sessions need not care.
    fn connect(&mut self, _preference: ProtocolPreference) -> Result<()> {
        Ok(())
    }

    /// Answer-to-reset bytes of the card, empty when unknown.
    fn atr(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

impl<S: CardSession + ?Sized> CardSession for Box<S> {
    fn transmit(&mut self, command: &[u8]) -> Result<ResponseApdu> {
        (**self).transmit(command)
    }

    fn connect(&mut self, preference: ProtocolPreference) -> Result<()> {
        (**self).connect(preference)
    }

    fn atr(&self) -> Result<Vec<u8>> {
        (**self).atr()
    }
}

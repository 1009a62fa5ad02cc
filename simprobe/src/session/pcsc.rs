// simprobe/src/session/pcsc.rs

#![cfg(feature = "pcsc")]

use std::ffi::{CStr, CString};

use ::pcsc::{Attribute, Card, Context, Disposition, Protocols, Scope, ShareMode, MAX_BUFFER_SIZE};
use log::{debug, info, warn};

use crate::protocol::ResponseApdu;
use crate::session::traits::{CardSession, ProtocolPreference};
use crate::utils::busy_backoff;
use crate::{Error, Result};

/// Attempts per protocol while the reader reports a sharing violation
/// (another application such as an LPA holding the card).
const BUSY_ATTEMPTS: u32 = 3;

/// PC/SC backed session. It is feature-gated behind `--features pcsc`.
pub struct PcscSession {
    // the context must outlive the card handle
    _context: Context,
    card: Card,
    reader: CString,
}

impl PcscSession {
    /// Connect to the card in the first reader PC/SC reports.
    pub fn open_first(preference: ProtocolPreference) -> Result<Self> {
        let context = Context::establish(Scope::User)?;
        let readers = context.list_readers_owned()?;
        let reader = readers
            .into_iter()
            .next()
            .ok_or_else(|| Error::CardNotReachable("no readers available".into()))?;
        Self::open_with(context, reader, preference)
    }

    /// Connect to the card in a specific reader.
    pub fn open(reader: &CStr, preference: ProtocolPreference) -> Result<Self> {
        let context = Context::establish(Scope::User)?;
        Self::open_with(context, reader.to_owned(), preference)
    }

    /// Names of all readers currently known to PC/SC.
    pub fn list_readers() -> Result<Vec<String>> {
        let context = Context::establish(Scope::User)?;
        Ok(context
            .list_readers_owned()?
            .into_iter()
            .map(|r| r.to_string_lossy().into_owned())
            .collect())
    }

    pub fn reader_name(&self) -> String {
        self.reader.to_string_lossy().into_owned()
    }

    fn open_with(context: Context, reader: CString, preference: ProtocolPreference) -> Result<Self> {
        let mut last_err = None;
        for protocols in protocol_sequence(preference) {
            match connect_with_retry(&context, &reader, *protocols) {
                Ok(card) => {
                    info!(
                        "connected to {} using {:?}",
                        reader.to_string_lossy(),
                        protocols
                    );
                    return Ok(Self {
                        _context: context,
                        card,
                        reader,
                    });
                }
                Err(e) => {
                    debug!("connect with {:?} failed: {}", protocols, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err
            .map(Error::from)
            .unwrap_or_else(|| Error::CardNotReachable("no protocol attempted".into())))
    }
}

/// Protocol attempts in order: autodetect first, then the explicit variants.
fn protocol_sequence(preference: ProtocolPreference) -> &'static [Protocols] {
    match preference {
        ProtocolPreference::Auto => &[Protocols::ANY, Protocols::T0, Protocols::T1],
        ProtocolPreference::T0 => &[Protocols::T0],
        ProtocolPreference::T1 => &[Protocols::T1],
    }
}

fn connect_with_retry(
    context: &Context,
    reader: &CStr,
    protocols: Protocols,
) -> std::result::Result<Card, ::pcsc::Error> {
    let mut attempt = 1;
    loop {
        match context.connect(reader, ShareMode::Shared, protocols) {
            Err(::pcsc::Error::SharingViolation) if attempt < BUSY_ATTEMPTS => {
                warn!(
                    "reader busy (attempt {}/{}), backing off",
                    attempt, BUSY_ATTEMPTS
                );
                std::thread::sleep(busy_backoff(attempt));
                attempt += 1;
            }
            other => return other,
        }
    }
}

impl CardSession for PcscSession {
    fn transmit(&mut self, command: &[u8]) -> Result<ResponseApdu> {
        let mut rapdu_buf = [0; MAX_BUFFER_SIZE];
        let rapdu = self.card.transmit(command, &mut rapdu_buf)?;
        ResponseApdu::from_bytes(rapdu)
    }

    fn connect(&mut self, preference: ProtocolPreference) -> Result<()> {
        let mut last_err = None;
        for protocols in protocol_sequence(preference) {
            match self
                .card
                .reconnect(ShareMode::Shared, *protocols, Disposition::LeaveCard)
            {
                Ok(()) => return Ok(()),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err
            .map(Error::from)
            .unwrap_or_else(|| Error::CardNotReachable("no protocol attempted".into())))
    }

    fn atr(&self) -> Result<Vec<u8>> {
        Ok(self.card.get_attribute_owned(Attribute::AtrString)?)
    }
}

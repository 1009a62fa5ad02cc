// simprobe/src/session/mock.rs

use std::collections::VecDeque;

use crate::protocol::ResponseApdu;
use crate::session::traits::{CardSession, ProtocolPreference};
use crate::{Error, Result};

/// Scripted session for tests. It records sent commands and replays queued
/// responses in order.
#[derive(Debug, Default)]
pub struct MockSession {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<ResponseApdu>,
    pub atr: Vec<u8>,
    /// Record of connect calls
    pub connects: Vec<ProtocolPreference>,
    /// Testing hook: number of transmit calls that should fail before the
    /// script is consulted
    pub transmit_failures: usize,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atr(atr: Vec<u8>) -> Self {
        Self {
            atr,
            ..Self::default()
        }
    }

    pub fn push_response(&mut self, data: Vec<u8>, sw1: u8, sw2: u8) {
        self.responses.push_back(ResponseApdu::new(data, sw1, sw2));
    }

    /// Queue a raw reply (data followed by SW1 SW2) as a reader would return it.
    pub fn push_raw(&mut self, raw: &[u8]) -> Result<()> {
        self.responses.push_back(ResponseApdu::from_bytes(raw)?);
        Ok(())
    }

    /// Set how many subsequent transmit calls should fail (for tests).
    pub fn set_transmit_failures(&mut self, n: usize) {
        self.transmit_failures = n;
    }

    /// Commands sent so far whose instruction byte equals `ins`.
    pub fn sent_with_ins(&self, ins: u8) -> usize {
        self.sent.iter().filter(|c| c.get(1) == Some(&ins)).count()
    }
}

impl CardSession for MockSession {
    fn transmit(&mut self, command: &[u8]) -> Result<ResponseApdu> {
        self.sent.push(command.to_vec());
        if self.transmit_failures > 0 {
            self.transmit_failures -= 1;
            return Err(Error::CardNotReachable("scripted transmit failure".into()));
        }
        self.responses.pop_front().ok_or(Error::Timeout)
    }

    fn connect(&mut self, preference: ProtocolPreference) -> Result<()> {
        self.connects.push(preference);
        Ok(())
    }

    fn atr(&self) -> Result<Vec<u8>> {
        Ok(self.atr.clone())
    }
}

// simprobe/src/protocol/apdu.rs

use log::trace;

use crate::constants::{MAX_COMMAND_DATA_LEN, MAX_EXPECTED_LEN};
use crate::session::CardSession;
use crate::types::{Status, StatusWord};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Short command APDU: `CLA INS P1 P2 [Lc data] [Le]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandApdu {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    data: Vec<u8>,
    le: Option<u16>,
}

impl CommandApdu {
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Assemble a command whose fields are known to be in range.
    pub(crate) fn from_parts(
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: Vec<u8>,
        le: Option<u16>,
    ) -> Self {
        debug_assert!(data.len() <= MAX_COMMAND_DATA_LEN);
        debug_assert!(le.is_none_or(|le| le <= MAX_EXPECTED_LEN));
        Self {
            cla,
            ins,
            p1,
            p2,
            data,
            le,
        }
    }

    /// Set command data. At most 255 bytes fit the Lc byte.
    pub fn data(mut self, data: Vec<u8>) -> Result<Self> {
        if data.len() > MAX_COMMAND_DATA_LEN {
            return Err(Error::InvalidArgument(format!(
                "command data must be at most {} bytes, got {}",
                MAX_COMMAND_DATA_LEN,
                data.len()
            )));
        }
        self.data = data;
        Ok(self)
    }

    /// Set expected response length (0..=256, both 0 and 256 encode as 0x00).
    pub fn le(mut self, le: u16) -> Result<Self> {
        if le > MAX_EXPECTED_LEN {
            return Err(Error::InvalidArgument(format!(
                "expected length must be at most {}, got {}",
                MAX_EXPECTED_LEN, le
            )));
        }
        self.le = Some(le);
        Ok(self)
    }

    pub fn command_data(&self) -> &[u8] {
        &self.data
    }

    pub fn expected_len(&self) -> Option<u16> {
        self.le
    }

    /// Build the APDU command bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut apdu = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        apdu.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);

        if !self.data.is_empty() {
            apdu.push(self.data.len() as u8);
            apdu.extend_from_slice(&self.data);
        }

        if let Some(le) = self.le {
            apdu.push((le & 0xFF) as u8);
        }

        apdu
    }

    /// Send this command through a session and return the split response.
    pub fn send<S: CardSession + ?Sized>(&self, session: &mut S) -> Result<ResponseApdu> {
        let bytes = self.encode();
        trace!("-> {}", bytes_to_hex_spaced(&bytes));
        let response = session.transmit(&bytes)?;
        trace!(
            "<- {} [{}]",
            bytes_to_hex_spaced(&response.data),
            response.status_word()
        );
        Ok(response)
    }
}

/// Response APDU: data plus trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseApdu {
    /// Response data (without status word)
    pub data: Vec<u8>,
    pub sw1: u8,
    pub sw2: u8,
}

impl ResponseApdu {
    pub fn new(data: Vec<u8>, sw1: u8, sw2: u8) -> Self {
        Self { data, sw1, sw2 }
    }

    /// Split a raw reader reply into data and status word.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        super::parser::ensure_len(raw, 2)?;
        let (data, sw) = raw.split_at(raw.len() - 2);
        Ok(Self {
            data: data.to_vec(),
            sw1: sw[0],
            sw2: sw[1],
        })
    }

    pub fn status_word(&self) -> StatusWord {
        StatusWord::new(self.sw1, self.sw2)
    }

    pub fn status(&self) -> Status {
        self.status_word().classify()
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }
}

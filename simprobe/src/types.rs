// simprobe/src/types.rs

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use derive_more::{Display, From};

use crate::constants::{
    AID_MAX_LEN, AID_MIN_LEN, EUICC_RID, SW1_MORE_DATA, SW1_WRONG_LENGTH, SW_NOT_FOUND,
    SW_SUCCESS,
};
use crate::Error;

/// Application Identifier - Newtype Pattern (5 to 16 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aid(Vec<u8>);

impl Aid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Uppercase hex without separators, the form AID lists use.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }

    /// True for GSMA eUICC applications (ISD-R and friends).
    pub fn is_euicc(&self) -> bool {
        self.to_hex().starts_with(EUICC_RID)
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !(AID_MIN_LEN..=AID_MAX_LEN).contains(&bytes.len()) {
            return Err(Error::InvalidArgument(format!(
                "AID must be {}..={} bytes, got {}",
                AID_MIN_LEN,
                AID_MAX_LEN,
                bytes.len()
            )));
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl TryFrom<Vec<u8>> for Aid {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Aid::try_from(&bytes[..])
    }
}

impl FromStr for Aid {
    type Err = Error;

    /// Parse hex text such as `"A0 00 00 00 87"` or `"a000000087"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidHex)?;
        Aid::try_from(bytes)
    }
}

impl fmt::Display for Aid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// File Identifier (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "{:04X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fid(u16);

impl Fid {
    pub const EF_DIR: Self = Self(crate::constants::FID_EF_DIR);
    pub const EF_MENU: Self = Self(crate::constants::FID_EF_MENU);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// Two-byte status word returned with every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02X}{:02X}", sw1, sw2)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    pub const SUCCESS: Self = Self::new(SW_SUCCESS.0, SW_SUCCESS.1);
    pub const NOT_FOUND: Self = Self::new(SW_NOT_FOUND.0, SW_NOT_FOUND.1);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }

    pub fn classify(&self) -> Status {
        classify(self.sw1, self.sw2)
    }

    pub fn is_success(&self) -> bool {
        self.classify() == Status::Success
    }

    /// `61 xx`: xx bytes are waiting to be fetched with GET RESPONSE.
    /// A zero SW2 means 256.
    pub fn more_data(&self) -> Option<u16> {
        if self.sw1 == SW1_MORE_DATA {
            Some(if self.sw2 == 0 { 256 } else { self.sw2 as u16 })
        } else {
            None
        }
    }
}

/// Outcome classes of a status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    Success,
    /// `6C xx`: reissue the command with Le = xx
    WrongLength(u8),
    /// `6A 82`: file or application not found
    NotFound,
    Other(u8, u8),
}

/// Classify a raw status word. Never fails; unknown codes are `Other`.
pub fn classify(sw1: u8, sw2: u8) -> Status {
    match (sw1, sw2) {
        SW_SUCCESS => Status::Success,
        SW_NOT_FOUND => Status::NotFound,
        (SW1_WRONG_LENGTH, n) => Status::WrongLength(n),
        (a, b) => Status::Other(a, b),
    }
}

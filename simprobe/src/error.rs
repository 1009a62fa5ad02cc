// simprobe/src/error.rs

use thiserror::Error;

use crate::types::{Fid, StatusWord};

/// Common error type for codec, card operations and sessions.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed argument handed to the codec (AID/FID/length out of bounds).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("card not reachable: {0}")]
    CardNotReachable(String),

    // only present when a PC/SC session is compiled in
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("operation timed out")]
    Timeout,

    #[error("invalid response length: expected at least {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("select of application {aid} failed: status={status}")]
    SelectFailed { aid: String, status: StatusWord },

    #[error("file {fid} not selectable: status={status}")]
    FileNotSelectable { fid: Fid, status: StatusWord },

    #[error("read failed: status={status}")]
    ReadFailed { status: StatusWord },

    #[error("file {fid} is empty")]
    EmptyFile { fid: Fid },

    #[error("parse incomplete: truncated at offset {offset}")]
    ParseIncomplete { offset: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the error comes from the session itself rather than from a
    /// card status word. Only these abort a scan.
    pub fn is_session_failure(&self) -> bool {
        match self {
            Error::CardNotReachable(_) | Error::Timeout | Error::InvalidLength { .. } => true,
            #[cfg(feature = "pcsc")]
            Error::Pcsc(_) => true,
            _ => false,
        }
    }

    /// Status word attached to card-level failures.
    pub fn status(&self) -> Option<StatusWord> {
        match self {
            Error::SelectFailed { status, .. }
            | Error::FileNotSelectable { status, .. }
            | Error::ReadFailed { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// simprobe/src/protocol/commands/mod.rs

pub mod get_data;
pub mod read;
pub mod select;

pub use get_data::{get_data, get_data_with_le};
pub use read::{get_response, read_binary};
pub use select::{SelectTarget, select, select_by_id, select_by_name, select_default};

use crate::Result;
use crate::constants::{INS_GET_DATA, INS_GET_RESPONSE, INS_READ_BINARY, INS_SELECT};
use crate::protocol::CommandApdu;
use crate::types::{Aid, Fid};

/// High-level Command enum. New commands should be added here and their
/// builder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectByName { aid: Aid },
    SelectById { fid: Fid },
    SelectDefault,
    ReadBinary { offset: u16, length: u16 },
    GetResponse { length: u16 },
    GetData { tag: u16 },
}

impl Command {
    /// Instruction byte as defined by ISO 7816-4.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::SelectByName { .. } | Self::SelectById { .. } | Self::SelectDefault => INS_SELECT,
            Self::ReadBinary { .. } => INS_READ_BINARY,
            Self::GetResponse { .. } => INS_GET_RESPONSE,
            Self::GetData { .. } => INS_GET_DATA,
        }
    }

    /// Build the command APDU.
    pub fn to_apdu(&self) -> Result<CommandApdu> {
        match self {
            Self::SelectByName { aid } => select_by_name(aid.as_bytes()),
            Self::SelectById { fid } => Ok(select_by_id(fid.as_u16())),
            Self::SelectDefault => Ok(select_default()),
            Self::ReadBinary { offset, length } => read_binary(*offset, *length),
            Self::GetResponse { length } => get_response(*length),
            Self::GetData { tag } => Ok(get_data(*tag)),
        }
    }

    /// Encode the command into raw APDU bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_apdu()?.encode())
    }
}

// simprobe/src/protocol/commands/get_data.rs

use crate::constants::{CLA_ISO, INS_GET_DATA};
use crate::protocol::CommandApdu;
use crate::Result;

/// GET DATA for a 16-bit tag: `00 CA <tag hi> <tag lo> 00`
pub fn get_data(tag: u16) -> CommandApdu {
    let [p1, p2] = tag.to_be_bytes();
    CommandApdu::from_parts(CLA_ISO, INS_GET_DATA, p1, p2, Vec::new(), Some(0))
}

/// GET DATA reissued with the length the card asked for.
pub fn get_data_with_le(tag: u16, le: u16) -> Result<CommandApdu> {
    let [p1, p2] = tag.to_be_bytes();
    CommandApdu::new(CLA_ISO, INS_GET_DATA, p1, p2).le(le)
}

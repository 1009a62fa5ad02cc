// simprobe/src/protocol/commands/read.rs

use crate::constants::{CLA_ISO, INS_GET_RESPONSE, INS_READ_BINARY, MAX_READ_OFFSET};
use crate::protocol::CommandApdu;
use crate::{Error, Result};

/// READ BINARY: `00 B0 <offset hi> <offset lo> <le>`.
///
/// A `length` of 0 asks the card to decide; cards usually answer `6C xx`
/// with the exact length.
pub fn read_binary(offset: u16, length: u16) -> Result<CommandApdu> {
    if offset > MAX_READ_OFFSET {
        // P1 bit 8 switches READ BINARY to short-FID addressing
        return Err(Error::InvalidArgument(format!(
            "READ BINARY offset must be at most {:#06x}, got {:#06x}",
            MAX_READ_OFFSET, offset
        )));
    }
    let [p1, p2] = offset.to_be_bytes();
    CommandApdu::new(CLA_ISO, INS_READ_BINARY, p1, p2).le(length)
}

/// GET RESPONSE: `00 C0 00 00 <le>`
pub fn get_response(length: u16) -> Result<CommandApdu> {
    CommandApdu::new(CLA_ISO, INS_GET_RESPONSE, 0x00, 0x00).le(length)
}

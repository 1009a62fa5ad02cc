// simprobe/src/protocol/commands/select.rs

use crate::constants::{
    AID_MAX_LEN, AID_MIN_LEN, CLA_ISO, INS_SELECT, P1_SELECT_BY_ID, P1_SELECT_BY_NAME,
};
use crate::protocol::CommandApdu;
use crate::{Error, Result};

/// What a SELECT addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget<'a> {
    /// DF name (AID bytes)
    Name(&'a [u8]),
    /// File identifier under the current application
    Id(u16),
}

/// Build a SELECT for either addressing mode.
pub fn select(target: SelectTarget<'_>) -> Result<CommandApdu> {
    match target {
        SelectTarget::Name(aid) => select_by_name(aid),
        SelectTarget::Id(fid) => Ok(select_by_id(fid)),
    }
}

/// SELECT by DF name: `00 A4 04 00 Lc <aid>`
pub fn select_by_name(aid: &[u8]) -> Result<CommandApdu> {
    if !(AID_MIN_LEN..=AID_MAX_LEN).contains(&aid.len()) {
        return Err(Error::InvalidArgument(format!(
            "AID must be {}..={} bytes, got {}",
            AID_MIN_LEN,
            AID_MAX_LEN,
            aid.len()
        )));
    }
    CommandApdu::new(CLA_ISO, INS_SELECT, P1_SELECT_BY_NAME, 0x00).data(aid.to_vec())
}

/// SELECT by file identifier: `00 A4 00 00 02 <fid hi> <fid lo>`
pub fn select_by_id(fid: u16) -> CommandApdu {
    CommandApdu::from_parts(
        CLA_ISO,
        INS_SELECT,
        P1_SELECT_BY_ID,
        0x00,
        fid.to_be_bytes().to_vec(),
        None,
    )
}

/// SELECT with an empty name: `00 A4 04 00 00`, answers with the card's
/// default application.
pub fn select_default() -> CommandApdu {
    CommandApdu::from_parts(CLA_ISO, INS_SELECT, P1_SELECT_BY_NAME, 0x00, Vec::new(), Some(0))
}

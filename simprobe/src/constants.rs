// simprobe/src/constants.rs
//! Protocol constants shared across the crate

/// Interindustry class byte used for every command we issue
pub const CLA_ISO: u8 = 0x00;

/// SELECT instruction
pub const INS_SELECT: u8 = 0xA4;
/// READ BINARY instruction
pub const INS_READ_BINARY: u8 = 0xB0;
/// GET RESPONSE instruction
pub const INS_GET_RESPONSE: u8 = 0xC0;
/// GET DATA instruction
pub const INS_GET_DATA: u8 = 0xCA;

/// SELECT P1: select by DF name (AID)
pub const P1_SELECT_BY_NAME: u8 = 0x04;
/// SELECT P1: select by file identifier
pub const P1_SELECT_BY_ID: u8 = 0x00;

/// Status word: normal processing
pub const SW_SUCCESS: (u8, u8) = (0x90, 0x00);
/// SW1 for "wrong Le, SW2 holds the exact length"
pub const SW1_WRONG_LENGTH: u8 = 0x6C;
/// SW1 for "SW2 bytes still available via GET RESPONSE"
pub const SW1_MORE_DATA: u8 = 0x61;
/// Status word: file or application not found
pub const SW_NOT_FOUND: (u8, u8) = (0x6A, 0x82);

/// Maximum Lc (single-byte length field)
pub const MAX_COMMAND_DATA_LEN: usize = 255;
/// Maximum Le for short APDUs (encoded as 0x00)
pub const MAX_EXPECTED_LEN: u16 = 256;
/// Highest offset READ BINARY can address without short-FID mode
pub const MAX_READ_OFFSET: u16 = 0x7FFF;

/// AID length bounds (ISO 7816-5)
pub const AID_MIN_LEN: usize = 5;
pub const AID_MAX_LEN: usize = 16;
/// EF_DIR entries only contribute the registered application provider prefix
pub const EF_DIR_AID_PREFIX_LEN: usize = 5;
/// EF_DIR application template tag
pub const TAG_APPLICATION_TEMPLATE: u8 = 0x61;

/// EF_DIR file identifier
pub const FID_EF_DIR: u16 = 0x2F00;
/// EF_MENU file identifier
pub const FID_EF_MENU: u16 = 0x6F30;

/// Count bytes at or above this value are not a menu entry count
pub const MENU_COUNT_LIMIT: u8 = 20;
/// Hard ceiling on decoded menu entries
pub const MAX_MENU_ENTRIES: usize = 19;
/// Shortest printable run reported by the menu fallback scan
pub const MIN_TEXT_SPAN_LEN: usize = 3;

/// Registered application provider prefix for eUICC (GSMA) AIDs
pub const EUICC_RID: &str = "A000000559";

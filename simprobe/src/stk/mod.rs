// simprobe/src/stk/mod.rs
//! SIM Toolkit file helpers: EF_MENU decoding and the printable-text
//! fallback used when a menu buffer does not follow the item layout.

pub mod menu;
pub mod spans;

pub use menu::{MenuDecode, MenuEntry, decode_menu, decode_name};
pub use spans::{TextSpan, scan_text_spans};

/// Catalog names of the files that belong to the SIM Toolkit.
pub const STK_FILE_NAMES: &[&str] = &[
    "EF_MENU",
    "EF_PROACTIVE",
    "EF_UST",
    "EF_EST",
    "EF_ARR",
    "EF_MSK",
    "EF_MSK_EXT",
];

pub fn is_stk_file(name: &str) -> bool {
    STK_FILE_NAMES.contains(&name)
}

// simprobe/src/card/mod.rs

use crate::Error;
use crate::stk::{self, MenuDecode};
use crate::types::{Aid, Fid};

pub mod operations;

/// One file read from an application. `name` is the catalog label, not
/// something the card reports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileRecord {
    pub fid: Fid,
    pub name: String,
    pub data: Vec<u8>,
}

impl FileRecord {
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.data)
    }
}

/// A catalog file that could not be read, with the reason.
#[derive(Debug)]
pub struct FileFailure {
    pub fid: Fid,
    pub name: String,
    pub error: Error,
}

/// Everything read from one selected application.
#[derive(Debug)]
pub struct ApplicationRecord {
    pub aid: Aid,
    pub select_response: Vec<u8>,
    /// Successful reads, in catalog order
    pub files: Vec<FileRecord>,
    pub failures: Vec<FileFailure>,
}

impl ApplicationRecord {
    pub fn file(&self, name: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Files belonging to the SIM Toolkit, in catalog order.
    pub fn stk_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| stk::is_stk_file(&f.name))
    }

    /// Decoded EF_MENU, when it was read.
    pub fn menu(&self) -> Option<MenuDecode> {
        self.files
            .iter()
            .find(|f| f.fid == Fid::EF_MENU)
            .map(|f| stk::decode_menu(&f.data))
    }
}

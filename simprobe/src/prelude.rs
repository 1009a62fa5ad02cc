// simprobe/src/prelude.rs

pub use crate::card::operations::{
    DirectoryListing, ProbeOutcome, enumerate_via_candidates, enumerate_via_directory, get_data,
    probe_aid, read_application, read_file,
};
pub use crate::card::{ApplicationRecord, FileFailure, FileRecord};
pub use crate::config::{AidListEntry, CandidateAid, CatalogFile, ScanConfig, ScanConfigBuilder};
pub use crate::protocol::{Command, CommandApdu, ResponseApdu};
pub use crate::scan::{ScanReport, Scanner, scan};
pub use crate::session::{CardSession, MockSession, ProtocolPreference};
#[cfg(feature = "pcsc")]
pub use crate::session::PcscSession;
pub use crate::stk::{MenuDecode, MenuEntry, TextSpan, decode_menu};
pub use crate::{Aid, Error, Fid, Result, Status, StatusWord};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};

// simprobe/src/scan/report.rs

use crate::Error;
use crate::card::ApplicationRecord;
use crate::card::operations::{DirectoryListing, ProbeOutcome};
use crate::stk::MenuDecode;
use crate::types::{Aid, StatusWord};

/// Answer to the empty-name SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultProbe {
    pub status: StatusWord,
    pub response: Vec<u8>,
}

/// One GET DATA attempt.
#[derive(Debug)]
pub struct DataObject {
    pub tag: u16,
    pub label: String,
    pub result: Result<Vec<u8>, Error>,
}

/// An application that was discovered but could not be selected.
#[derive(Debug)]
pub struct ApplicationFailure {
    pub aid: Aid,
    pub error: Error,
}

/// Everything one scan tried, successful or not.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub atr: Vec<u8>,
    pub default_application: Option<DefaultProbe>,
    /// `None` when EF_DIR reading was disabled
    pub directory: Option<Result<DirectoryListing, Error>>,
    pub candidates: Vec<ProbeOutcome>,
    /// AIDs handed to the read pass: EF_DIR ones, then successful candidates
    pub discovery_order: Vec<Aid>,
    pub applications: Vec<ApplicationRecord>,
    pub application_failures: Vec<ApplicationFailure>,
    pub data_objects: Vec<DataObject>,
}

impl ScanReport {
    /// Discovered AIDs in discovery order, whether or not the later
    /// SELECT succeeded.
    pub fn discovered(&self) -> Vec<&Aid> {
        self.discovery_order.iter().collect()
    }

    pub fn application(&self, aid: &Aid) -> Option<&ApplicationRecord> {
        self.applications.iter().find(|a| a.aid == *aid)
    }

    /// Decoded EF_MENU per application that had one.
    pub fn menus(&self) -> Vec<(&Aid, MenuDecode)> {
        self.applications
            .iter()
            .filter_map(|a| a.menu().map(|m| (&a.aid, m)))
            .collect()
    }

    pub fn data_object(&self, tag: u16) -> Option<&DataObject> {
        self.data_objects.iter().find(|d| d.tag == tag)
    }
}

// simprobe/src/config/catalog.rs
//! Static catalogs: files worth reading under an application, AIDs worth
//! probing when EF_DIR is missing, and GET DATA tags.

use crate::types::{Aid, Fid};

/// A file to read under each application, with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogFile {
    pub fid: Fid,
    pub name: String,
}

impl CatalogFile {
    pub fn new(fid: u16, name: &str) -> Self {
        Self {
            fid: Fid::new(fid),
            name: name.to_string(),
        }
    }
}

/// An AID to try by direct SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CandidateAid {
    pub aid: Aid,
    pub label: String,
}

impl CandidateAid {
    pub fn new(aid: Aid, label: &str) -> Self {
        Self {
            aid,
            label: label.to_string(),
        }
    }
}

/// A GET DATA tag (P1P2) with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataTag {
    pub tag: u16,
    pub label: &'static str,
}

pub const WELL_KNOWN_FILES: &[(u16, &str)] = &[
    (0x6F07, "EF_IMSI"),
    (0x6F20, "EF_SST"),
    (0x6FAD, "EF_ADN"),
    (0x6F3A, "EF_AD"),
    (0x6F3B, "EF_MSISDN"),
    (0x6F30, "EF_MENU"),
    (0x6F10, "EF_PROACTIVE"),
    (0x6F38, "EF_UST"),
    (0x6F56, "EF_EST"),
    (0x6F06, "EF_ARR"),
    (0x6F42, "EF_MSK"),
    (0x6F43, "EF_MSK_EXT"),
];

pub const CANDIDATE_AIDS: &[(&str, &str)] = &[
    ("A0000005591010FFFFFFFF8900000177", "eUICC ISD-R"),
    ("A0000000871004FF86FF4989", "ISIM/STK"),
    ("A0000000871002FF86FF4989", "USIM/STK"),
    ("A0000000871002FF49FF0589", "USIM"),
    ("A000000087", "3GPP"),
    ("A0000000030000", "SIM"),
    ("A000000559", "GSMA eUICC"),
    ("A000000003", "Visa"),
    ("A000000004", "MasterCard"),
];

pub const GET_DATA_TAGS: &[DataTag] = &[
    DataTag {
        tag: 0x0042,
        label: "ICCID",
    },
    DataTag {
        tag: 0x0043,
        label: "Application Label",
    },
    DataTag {
        tag: 0x0045,
        label: "Application Template",
    },
];

pub fn well_known_files() -> Vec<CatalogFile> {
    WELL_KNOWN_FILES
        .iter()
        .map(|&(fid, name)| CatalogFile::new(fid, name))
        .collect()
}

/// `CANDIDATE_AIDS` as typed values. Every literal is a valid AID.
pub fn candidate_aids() -> Vec<CandidateAid> {
    CANDIDATE_AIDS
        .iter()
        .filter_map(|&(hex, label)| hex.parse().ok().map(|aid| CandidateAid::new(aid, label)))
        .collect()
}

pub fn get_data_tags() -> Vec<DataTag> {
    GET_DATA_TAGS.to_vec()
}

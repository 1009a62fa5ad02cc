// simprobe/src/card/operations/directory.rs

use log::{debug, info, warn};

use crate::card::operations::read::read_file;
use crate::card::operations::select::{ProbeOutcome, probe_aid};
use crate::constants::{EF_DIR_AID_PREFIX_LEN, TAG_APPLICATION_TEMPLATE};
use crate::protocol::parser;
use crate::session::CardSession;
use crate::types::{Aid, Fid};
use crate::{Error, Result};

/// AIDs listed in EF_DIR, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub aids: Vec<Aid>,
    /// Offset of the record whose declared length ran past the buffer
    pub truncated_at: Option<usize>,
}

impl DirectoryListing {
    pub fn check_complete(&self) -> Result<()> {
        match self.truncated_at {
            Some(offset) => Err(Error::ParseIncomplete { offset }),
            None => Ok(()),
        }
    }
}

/// Walk EF_DIR as `tag len value` records.
///
/// Only the first five bytes of each `61` template are kept (the RID plus
/// the first PIX byte); nested tags are not interpreted. A length running
/// past the buffer stops the walk and keeps what was parsed. A `00 00`
/// record is skipped like any other tag; a trailing run of `FF` bytes is
/// erased record space and ends the walk cleanly.
pub fn parse_ef_dir(data: &[u8]) -> DirectoryListing {
    let mut listing = DirectoryListing::default();
    let mut i = 0usize;

    while i < data.len() {
        let tag = data[i];
        if data[i..].iter().all(|&b| b == 0xFF) {
            break;
        }
        let len = match parser::byte_at(data, i + 1) {
            Ok(len) => len as usize,
            Err(_) => {
                listing.truncated_at = Some(i);
                break;
            }
        };
        let value = match parser::slice_at(data, i + 2, len) {
            Ok(value) => value,
            Err(_) => {
                listing.truncated_at = Some(i);
                break;
            }
        };

        if tag == TAG_APPLICATION_TEMPLATE && value.len() >= EF_DIR_AID_PREFIX_LEN {
            // five bytes always satisfy the AID bounds
            if let Ok(aid) = Aid::try_from(&value[..EF_DIR_AID_PREFIX_LEN]) {
                listing.aids.push(aid);
            }
        }
        i += 2 + len;
    }

    if let Some(offset) = listing.truncated_at {
        warn!("EF_DIR truncated at offset {}", offset);
    }
    listing
}

/// Read EF_DIR (2F00) and list the applications it names.
pub fn enumerate_via_directory<S: CardSession + ?Sized>(session: &mut S) -> Result<DirectoryListing> {
    let data = read_file(session, Fid::EF_DIR)?;
    let listing = parse_ef_dir(&data);
    for aid in &listing.aids {
        info!("EF_DIR lists {}", aid);
    }
    Ok(listing)
}

/// Probe every candidate in order.
///
/// Card statuses never stop the sweep; only a failing session does.
pub fn enumerate_via_candidates<'a, S, I>(session: &mut S, candidates: I) -> Result<Vec<ProbeOutcome>>
where
    S: CardSession + ?Sized,
    I: IntoIterator<Item = &'a Aid>,
{
    let mut outcomes = Vec::new();
    for aid in candidates {
        let outcome = probe_aid(session, aid)?;
        if outcome.success() {
            info!("candidate {} selected", aid);
        } else {
            debug!("candidate {} -> {}", aid, outcome.status);
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// `(aid, select response)` of the successful probes, in probe order.
pub fn found(outcomes: &[ProbeOutcome]) -> Vec<(Aid, Vec<u8>)> {
    outcomes
        .iter()
        .filter(|o| o.success())
        .map(|o| (o.aid.clone(), o.response.clone()))
        .collect()
}

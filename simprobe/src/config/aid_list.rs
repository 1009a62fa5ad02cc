// simprobe/src/config/aid_list.rs

use std::path::Path;

use log::debug;

use crate::Result;
use crate::constants::{AID_MAX_LEN, AID_MIN_LEN, EUICC_RID};
use crate::types::Aid;

/// One line of an `aid.txt` list: `AID: description`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AidListEntry {
    pub aid: Aid,
    pub description: String,
    pub is_euicc: bool,
}

const SKIPPED_PREFIXES: &[&str] = &["#", "Filetype:", "Version:"];

/// Parse the text of an AID list. Lines that are not `hex: text` with a
/// well-formed 5..=16 byte AID are skipped.
pub fn parse_aid_list(text: &str) -> Vec<AidListEntry> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<AidListEntry> {
    let line = line.trim();
    if line.is_empty() || SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return None;
    }
    let (aid, description) = line.split_once(':')?;
    let hex: String = aid.trim().replace(' ', "").to_ascii_uppercase();

    if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        debug!("skipping malformed AID line: {}", line);
        return None;
    }
    if !(AID_MIN_LEN * 2..=AID_MAX_LEN * 2).contains(&hex.len()) {
        debug!("skipping AID of {} bytes: {}", hex.len() / 2, hex);
        return None;
    }

    let aid: Aid = hex.parse().ok()?;
    Some(AidListEntry {
        is_euicc: hex.starts_with(EUICC_RID),
        aid,
        description: description.trim().to_string(),
    })
}

pub fn load_aid_list<P: AsRef<Path>>(path: P) -> Result<Vec<AidListEntry>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_aid_list(&text))
}

/// Case-insensitive substring match on AID hex or description. An empty
/// query matches everything.
pub fn search_aid_list<'a>(entries: &'a [AidListEntry], query: &str) -> Vec<&'a AidListEntry> {
    let query = query.trim().to_uppercase();
    entries
        .iter()
        .filter(|e| {
            query.is_empty()
                || e.aid.to_hex().contains(&query)
                || e.description.to_uppercase().contains(&query)
        })
        .collect()
}

/// Pick the entry that best matches `current`: exact AID, then a prefix in
/// either direction, then a full-length eUICC AID, any eUICC AID, and
/// finally the first entry.
pub fn find_best_aid<'a>(current: &Aid, entries: &'a [AidListEntry]) -> Option<&'a AidListEntry> {
    let cur = current.as_bytes();
    entries
        .iter()
        .find(|e| e.aid == *current)
        .or_else(|| {
            entries.iter().find(|e| {
                let a = e.aid.as_bytes();
                cur.starts_with(a) || a.starts_with(cur)
            })
        })
        .or_else(|| {
            entries
                .iter()
                .find(|e| e.is_euicc && e.aid.len() == AID_MAX_LEN)
        })
        .or_else(|| entries.iter().find(|e| e.is_euicc))
        .or_else(|| entries.first())
}

/// eUICC entries first, the rest after, each group in file order.
pub fn euicc_first(entries: &[AidListEntry]) -> Vec<&AidListEntry> {
    let (mut euicc, other): (Vec<_>, Vec<_>) = entries.iter().partition(|e| e.is_euicc);
    euicc.extend(other);
    euicc
}

// simprobe/src/stk/menu.rs

use log::{debug, warn};

use crate::constants::{MAX_MENU_ENTRIES, MENU_COUNT_LIMIT};
use crate::stk::spans::{TextSpan, is_printable, scan_text_spans};

/// One decoded STK menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MenuEntry {
    pub id: u8,
    /// Item type/flags byte
    pub kind: u8,
    pub name: String,
}

/// Result of decoding an EF_MENU buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MenuDecode {
    /// Fewer than two bytes: nothing to decode
    Empty,
    Entries {
        entries: Vec<MenuEntry>,
        /// Offset where decoding stopped before reaching the declared count
        truncated_at: Option<usize>,
    },
    /// No structured entry found; printable runs of the raw buffer instead
    Fallback(Vec<TextSpan>),
}

impl MenuDecode {
    pub fn entries(&self) -> &[MenuEntry] {
        match self {
            MenuDecode::Entries { entries, .. } => entries,
            _ => &[],
        }
    }
}

/// Decode an EF_MENU buffer.
///
/// Layout: `count`, then per item `id kind name_len name`. A count of 20 or
/// more means the buffer is not in this layout. Pure function of `data`.
pub fn decode_menu(data: &[u8]) -> MenuDecode {
    if data.len() < 2 {
        return MenuDecode::Empty;
    }

    let declared = data[0];
    if declared >= MENU_COUNT_LIMIT {
        debug!("menu count byte {:#04x} out of range, scanning text", declared);
        return MenuDecode::Fallback(scan_text_spans(data));
    }

    let count = (declared as usize).min(MAX_MENU_ENTRIES);
    let mut entries = Vec::with_capacity(count);
    let mut truncated_at = None;
    let mut idx = 1usize;

    while entries.len() < count {
        let Some(&[id, kind, name_len]) = data.get(idx..idx + 3) else {
            truncated_at = Some(idx);
            break;
        };
        let name_len = name_len as usize;
        let name_start = idx + 3;
        let Some(name) = data.get(name_start..name_start + name_len).filter(|_| name_len > 0) else {
            truncated_at = Some(idx);
            break;
        };
        entries.push(MenuEntry {
            id,
            kind,
            name: decode_name(name),
        });
        idx = name_start + name_len;
    }

    if entries.is_empty() {
        return MenuDecode::Fallback(scan_text_spans(data));
    }
    if let Some(offset) = truncated_at {
        warn!(
            "menu declares {} items, decoded {} before offset {}",
            declared,
            entries.len(),
            offset
        );
    }
    MenuDecode::Entries {
        entries,
        truncated_at,
    }
}

/// UTF-8 when valid, otherwise printable ASCII with `\xNN` escapes.
pub fn decode_name(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes
            .iter()
            .map(|&b| {
                if is_printable(b) {
                    (b as char).to_string()
                } else {
                    format!("\\x{:02X}", b)
                }
            })
            .collect(),
    }
}

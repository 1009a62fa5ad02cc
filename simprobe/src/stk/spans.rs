// simprobe/src/stk/spans.rs

use crate::constants::MIN_TEXT_SPAN_LEN;

/// A run of printable ASCII found in a raw buffer. `end` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

pub(crate) fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Split `data` into maximal printable runs and keep the ones at least
/// `MIN_TEXT_SPAN_LEN` long, in source order.
pub fn scan_text_spans(data: &[u8]) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut start = None;

    // a sentinel past the end closes a trailing run
    for (i, b) in data.iter().copied().map(Some).chain(std::iter::once(None)).enumerate() {
        match (b.is_some_and(is_printable), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= MIN_TEXT_SPAN_LEN {
                    spans.push(TextSpan {
                        start: s,
                        end: i - 1,
                        text: data[s..i].iter().map(|&c| c as char).collect(),
                    });
                }
                start = None;
            }
            _ => {}
        }
    }
    spans
}

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use simprobe::stk::{MenuDecode, decode_menu, is_stk_file, scan_text_spans};

#[test]
fn two_entry_menu() {
    let decoded = decode_menu(&common::fixtures::menu_two_entries());
    let names: Vec<_> = decoded.entries().iter().map(|e| (e.id, e.name.as_str())).collect();
    assert_eq!(names, vec![(1, "Test"), (2, "ABC")]);
    assert!(matches!(
        decoded,
        MenuDecode::Entries {
            truncated_at: None,
            ..
        }
    ));
}

#[test]
fn garbage_menu_yields_text_spans() {
    match decode_menu(&common::fixtures::menu_garbage()) {
        MenuDecode::Fallback(spans) => {
            let found: Vec<_> = spans.iter().map(|s| (s.start, s.end, s.text.as_str())).collect();
            assert_eq!(found, vec![(5, 8, "Menu"), (12, 14, "OK!")]);
        }
        other => panic!("expected fallback, got {:?}", other),
    }
}

#[test]
fn stk_catalog_names() {
    for name in ["EF_MENU", "EF_PROACTIVE", "EF_UST", "EF_EST", "EF_ARR", "EF_MSK", "EF_MSK_EXT"] {
        assert!(is_stk_file(name), "{}", name);
    }
    assert!(!is_stk_file("EF_ADN"));
}

proptest! {
    #[test]
    fn decode_never_panics_and_is_deterministic(v in prop::collection::vec(any::<u8>(), 0..200)) {
        let first = decode_menu(&v);
        prop_assert_eq!(&first, &decode_menu(&v));
        if let MenuDecode::Entries { entries, .. } = &first {
            prop_assert!(!entries.is_empty());
            prop_assert!(entries.len() <= 19);
            prop_assert!(entries.len() <= v[0] as usize);
        }
    }

    #[test]
    fn fallback_spans_match_scan(v in prop::collection::vec(any::<u8>(), 2..64)) {
        let mut data = v.clone();
        data[0] = 0xFF;
        prop_assert_eq!(decode_menu(&data), MenuDecode::Fallback(scan_text_spans(&data)));
    }
}

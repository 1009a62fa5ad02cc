use std::io::Write;

use simprobe::config::{ScanConfig, load_aid_list, search_aid_list};

#[test]
fn load_list_from_disk_and_extend_candidates() {
    let path = std::env::temp_dir().join(format!("simprobe-aid-{}.txt", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Filetype: Flipper NFC AIDs").unwrap();
        writeln!(f, "# payment").unwrap();
        writeln!(f, "A0 00 00 00 25 01: American Express").unwrap();
        writeln!(f, "D2 76 00 00 85 01 01: NDEF").unwrap();
        writeln!(f, "A0000005591010FFFFFFFF8900000100: ISD-R").unwrap();
    }

    let entries = load_aid_list(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(search_aid_list(&entries, "ndef")[0].aid.to_hex(), "D2760000850101");

    let config = ScanConfig::builder()
        .candidates(vec![])
        .with_aid_list(&entries)
        .build();
    let labels: Vec<_> = config.candidates.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["ISD-R", "American Express", "NDEF"]);
}

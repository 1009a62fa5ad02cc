#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use serial_test::serial;
use simprobe::{CardSession, Result, ScanConfig, scan};

// These tests need a PC/SC reader with a SIM inserted. They are marked
// `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p simprobe --test hardware --features pcsc -- --ignored
//

#[test]
#[ignore]
#[serial]
fn open_and_read_atr() -> Result<()> {
    if let Some(session) = common::open_first_session()? {
        let atr = session.atr()?;
        assert!(!atr.is_empty());
        assert!(matches!(atr[0], 0x3B | 0x3F));
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn default_scan_completes() -> Result<()> {
    if let Some(mut session) = common::open_first_session()? {
        let report = scan(&mut session, ScanConfig::default())?;
        assert_eq!(report.candidates.len(), ScanConfig::default().candidates.len());
    }
    Ok(())
}

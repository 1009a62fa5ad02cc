#[path = "../common/mod.rs"]
mod common;

use common::helpers::{ScriptedFile, seed_application, seed_file, seed_not_found, seed_ok};
use simprobe::config::{CandidateAid, CatalogFile, DataTag, ScanConfig};
use simprobe::protocol::ResponseApdu;
use simprobe::{CardSession, Error, MenuDecode, MockSession, Result, StatusWord, scan};

/// Session whose reader cannot report an ATR.
struct NoAtrSession(MockSession);

impl CardSession for NoAtrSession {
    fn transmit(&mut self, command: &[u8]) -> Result<ResponseApdu> {
        self.0.transmit(command)
    }

    fn atr(&self) -> Result<Vec<u8>> {
        Err(Error::CardNotReachable("attribute unavailable".into()))
    }
}

fn small_config() -> ScanConfig {
    ScanConfig::builder()
        .candidates(vec![
            CandidateAid::new(common::fixtures::visa_rid(), "Visa"),
            CandidateAid::new("A000000004".parse().unwrap(), "MasterCard"),
        ])
        .files(vec![
            CatalogFile::new(0x6F07, "EF_IMSI"),
            CatalogFile::new(0x6F30, "EF_MENU"),
        ])
        .get_data_tags(vec![DataTag {
            tag: 0x0042,
            label: "ICCID",
        }])
        .build()
}

#[test]
fn full_scan_records_every_step() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut session = MockSession::with_atr(vec![0x3B, 0x9F, 0x96]);
    seed_ok(&mut session, vec![0x6F, 0x00]); // default application
    seed_file(
        &mut session,
        &ScriptedFile::Data(vec![0x61, 0x05, 0xA0, 0x00, 0x00, 0x00, 0x87]),
    );
    seed_ok(&mut session, vec![0x6F, 0x01]); // Visa
    seed_not_found(&mut session, 1); // MasterCard
    seed_application(
        &mut session,
        vec![0x62, 0x00],
        &[
            ScriptedFile::Data(vec![0x08, 0x49, 0x06]),
            ScriptedFile::Data(common::fixtures::menu_two_entries()),
        ],
    );
    seed_not_found(&mut session, 1); // Visa no longer selectable
    seed_ok(&mut session, common::fixtures::iccid());

    let report = scan(&mut session, small_config()).unwrap();
    assert!(session.responses.is_empty());

    assert_eq!(report.atr, vec![0x3B, 0x9F, 0x96]);
    assert_eq!(
        report.default_application.as_ref().unwrap().status,
        StatusWord::SUCCESS
    );
    let listing = report.directory.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(listing.aids[0].to_hex(), "A000000087");

    assert_eq!(report.candidates.len(), 2);
    assert!(report.candidates[0].success());
    assert!(!report.candidates[1].success());

    assert_eq!(report.applications.len(), 1);
    assert_eq!(report.applications[0].files.len(), 2);
    assert_eq!(report.application_failures.len(), 1);
    assert!(matches!(
        report.application_failures[0].error,
        Error::SelectFailed { .. }
    ));
    let discovered: Vec<_> = report.discovered().iter().map(|a| a.to_hex()).collect();
    assert_eq!(discovered, vec!["A000000087", "A000000003"]);

    let menus = report.menus();
    assert_eq!(menus.len(), 1);
    assert!(matches!(menus[0].1, MenuDecode::Entries { .. }));

    let iccid = report.data_object(0x0042).unwrap();
    assert_eq!(iccid.result.as_ref().unwrap(), &common::fixtures::iccid());
}

#[test]
fn card_errors_are_recorded_not_fatal() {
    let mut session = MockSession::new();
    seed_not_found(&mut session, 1); // EF_DIR
    session.push_response(vec![], 0x6A, 0x81); // GET DATA unsupported

    let config = ScanConfig::builder()
        .probe_default(false)
        .candidates(vec![])
        .get_data_tags(vec![DataTag {
            tag: 0x0042,
            label: "ICCID",
        }])
        .build();
    let report = scan(&mut session, config).unwrap();

    assert!(report.default_application.is_none());
    assert!(matches!(
        report.directory,
        Some(Err(Error::FileNotSelectable { .. }))
    ));
    assert!(report.applications.is_empty());
    assert!(matches!(
        report.data_objects[0].result,
        Err(Error::ReadFailed { .. })
    ));
}

#[test]
fn session_failure_aborts_scan() {
    let mut session = MockSession::new();
    seed_ok(&mut session, vec![]);
    // EF_DIR select runs into an exhausted script
    assert!(matches!(
        scan(&mut session, small_config()),
        Err(Error::Timeout)
    ));

    let mut session = MockSession::new();
    session.set_transmit_failures(1);
    assert!(matches!(
        scan(&mut session, small_config()),
        Err(Error::CardNotReachable(_))
    ));
}

#[test]
fn directory_can_be_skipped() {
    let mut session = MockSession::new();
    seed_not_found(&mut session, 2);
    let config = ScanConfig::builder()
        .probe_default(false)
        .read_directory(false)
        .candidates(small_config().candidates)
        .get_data_tags(vec![])
        .build();

    let report = scan(&mut session, config).unwrap();
    assert!(report.directory.is_none());
    assert_eq!(report.candidates.len(), 2);
    assert!(report.discovered().is_empty());
    assert_eq!(session.sent.len(), 2);
}

#[test]
fn discovered_keeps_directory_order_when_select_fails() {
    let mut session = MockSession::new();
    seed_file(
        &mut session,
        &ScriptedFile::Data(vec![0x61, 0x05, 0xA0, 0x00, 0x00, 0x00, 0x87]),
    );
    seed_ok(&mut session, vec![0x6F, 0x01]); // Visa candidate
    seed_not_found(&mut session, 1); // EF_DIR application refuses SELECT
    seed_application(&mut session, vec![0x6F, 0x01], &[]);

    let config = ScanConfig::builder()
        .probe_default(false)
        .candidates(vec![CandidateAid::new(common::fixtures::visa_rid(), "Visa")])
        .files(vec![])
        .get_data_tags(vec![])
        .build();
    let report = scan(&mut session, config).unwrap();
    assert!(session.responses.is_empty());

    let discovered: Vec<_> = report.discovered().iter().map(|a| a.to_hex()).collect();
    assert_eq!(discovered, vec!["A000000087", "A000000003"]);
    assert_eq!(report.applications[0].aid.to_hex(), "A000000003");
    assert_eq!(report.application_failures[0].aid.to_hex(), "A000000087");
}

#[test]
fn missing_atr_does_not_stop_the_scan() {
    let mut inner = MockSession::new();
    seed_not_found(&mut inner, 1);
    let mut session = NoAtrSession(inner);

    let config = ScanConfig::builder()
        .probe_default(false)
        .read_directory(false)
        .candidates(vec![CandidateAid::new(common::fixtures::visa_rid(), "Visa")])
        .get_data_tags(vec![])
        .build();
    let report = scan(&mut session, config).unwrap();

    assert!(report.atr.is_empty());
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(session.0.sent.len(), 1);
}

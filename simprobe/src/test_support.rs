//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockSession scripting so tests across the
//! crate and tests/ directory can describe card behavior the same way.
#![allow(dead_code)]

use crate::session::MockSession;

/// What the card does when one catalog file is selected and read.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub enum ScriptedFile {
    /// SELECT answers `6A 82`
    Missing,
    /// SELECT succeeds and READ BINARY returns the bytes
    Data(Vec<u8>),
    /// SELECT succeeds, READ BINARY answers `6C xx`, the reissue returns the bytes
    WrongLength(Vec<u8>),
}

/// Build a MockSession pre-seeded with `(data, sw1, sw2)` replies.
#[doc(hidden)]
pub fn scripted_session(responses: Vec<(Vec<u8>, u8, u8)>) -> MockSession {
    let mut mock = MockSession::new();
    for (data, sw1, sw2) in responses {
        mock.push_response(data, sw1, sw2);
    }
    mock
}

#[doc(hidden)]
pub fn seed_ok(mock: &mut MockSession, data: Vec<u8>) {
    mock.push_response(data, 0x90, 0x00);
}

#[doc(hidden)]
pub fn seed_not_found(mock: &mut MockSession, count: usize) {
    for _ in 0..count {
        mock.push_response(vec![], 0x6A, 0x82);
    }
}

/// Script one file read: SELECT by id, then READ BINARY (and its reissue).
#[doc(hidden)]
pub fn seed_file(mock: &mut MockSession, file: &ScriptedFile) {
    match file {
        ScriptedFile::Missing => seed_not_found(mock, 1),
        ScriptedFile::Data(data) => {
            seed_ok(mock, vec![]);
            seed_ok(mock, data.clone());
        }
        ScriptedFile::WrongLength(data) => {
            seed_ok(mock, vec![]);
            mock.push_response(vec![], 0x6C, data.len() as u8);
            seed_ok(mock, data.clone());
        }
    }
}

/// Script a successful application SELECT followed by one entry per
/// catalog file, in catalog order.
#[doc(hidden)]
pub fn seed_application(mock: &mut MockSession, select_response: Vec<u8>, files: &[ScriptedFile]) {
    seed_ok(mock, select_response);
    for f in files {
        seed_file(mock, f);
    }
}

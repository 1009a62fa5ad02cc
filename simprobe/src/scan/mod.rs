// simprobe/src/scan/mod.rs

pub mod report;
pub mod scanner;

pub use report::{ApplicationFailure, DataObject, DefaultProbe, ScanReport};
pub use scanner::Scanner;

use crate::Result;
use crate::config::ScanConfig;
use crate::session::CardSession;

/// Run a scan with `config` over `session`.
pub fn scan<S: CardSession + ?Sized>(session: &mut S, config: ScanConfig) -> Result<ScanReport> {
    Scanner::new(session, config).run()
}

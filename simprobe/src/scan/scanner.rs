// simprobe/src/scan/scanner.rs

use log::{debug, info, warn};

use crate::card::operations::{
    enumerate_via_candidates, enumerate_via_directory, found, get_data, probe_default_application,
    read_application,
};
use crate::config::ScanConfig;
use crate::scan::report::{ApplicationFailure, DataObject, DefaultProbe, ScanReport};
use crate::session::CardSession;
use crate::types::Aid;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Runs a full probe over one session.
///
/// Card status failures are recorded in the report and the scan moves on.
/// A session failure ends the scan with that error.
pub struct Scanner<'s, S: CardSession + ?Sized> {
    session: &'s mut S,
    config: ScanConfig,
}

impl<'s, S: CardSession + ?Sized> Scanner<'s, S> {
    pub fn new(session: &'s mut S, config: ScanConfig) -> Self {
        Self { session, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn run(&mut self) -> Result<ScanReport> {
        let atr = self.session.atr().unwrap_or_else(|e| {
            warn!("ATR unavailable: {}", e);
            Vec::new()
        });
        let mut report = ScanReport {
            atr,
            ..ScanReport::default()
        };
        if !report.atr.is_empty() {
            info!("ATR: {}", bytes_to_hex_spaced(&report.atr));
        }

        if self.config.probe_default {
            report.default_application = Some(self.probe_default()?);
        }

        let mut aids: Vec<Aid> = Vec::new();
        if self.config.read_directory {
            match enumerate_via_directory(&mut *self.session) {
                Ok(listing) => {
                    aids.extend(listing.aids.iter().cloned());
                    report.directory = Some(Ok(listing));
                }
                Err(e) if e.is_session_failure() => return Err(e),
                Err(e) => {
                    debug!("EF_DIR unavailable: {}", e);
                    report.directory = Some(Err(e));
                }
            }
        }

        let candidates: Vec<&Aid> = self.config.candidates.iter().map(|c| &c.aid).collect();
        report.candidates = enumerate_via_candidates(&mut *self.session, candidates)?;
        aids.extend(found(&report.candidates).into_iter().map(|(aid, _)| aid));
        info!("{} application(s) to read", aids.len());
        for aid in &aids {
            match read_application(&mut *self.session, aid, &self.config.files) {
                Ok(record) => {
                    info!(
                        "{}: {} file(s) read, {} failed",
                        aid,
                        record.files.len(),
                        record.failures.len()
                    );
                    report.applications.push(record);
                }
                Err(e) if e.is_session_failure() => return Err(e),
                Err(e) => {
                    warn!("{}: {}", aid, e);
                    report.application_failures.push(ApplicationFailure {
                        aid: aid.clone(),
                        error: e,
                    });
                }
            }
        }

        report.discovery_order = aids;

        for tag in &self.config.get_data_tags {
            let result = match get_data(&mut *self.session, tag.tag) {
                Err(e) if e.is_session_failure() => return Err(e),
                other => other,
            };
            match &result {
                Err(e) => debug!("GET DATA {:04X} ({}): {}", tag.tag, tag.label, e),
                Ok(data) => info!("GET DATA {:04X} ({}): {} bytes", tag.tag, tag.label, data.len()),
            }
            report.data_objects.push(DataObject {
                tag: tag.tag,
                label: tag.label.to_string(),
                result,
            });
        }

        Ok(report)
    }

    fn probe_default(&mut self) -> Result<DefaultProbe> {
        let resp = probe_default_application(&mut *self.session)?;
        debug!("default application -> {}", resp.status_word());
        Ok(DefaultProbe {
            status: resp.status_word(),
            response: resp.data,
        })
    }
}

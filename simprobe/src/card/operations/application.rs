// simprobe/src/card/operations/application.rs

use log::{debug, info};

use crate::card::operations::read::read_file;
use crate::card::operations::select::select_application;
use crate::card::{ApplicationRecord, FileFailure, FileRecord};
use crate::config::CatalogFile;
use crate::session::CardSession;
use crate::types::Aid;
use crate::{Error, Result};

/// Select `aid` and read every catalog file under it.
///
/// A file that cannot be read is recorded in `failures` and the pass moves
/// on. Only a session failure ends the pass early.
pub fn read_application<S: CardSession + ?Sized>(
    session: &mut S,
    aid: &Aid,
    catalog: &[CatalogFile],
) -> Result<ApplicationRecord> {
    let select_response = select_application(session, aid)?;
    info!("reading files of {}", aid);

    let mut files = Vec::new();
    let mut failures = Vec::new();
    for entry in catalog {
        match read_file(session, entry.fid) {
            Ok(data) if !data.is_empty() => {
                debug!("{} ({}): {} bytes", entry.name, entry.fid, data.len());
                files.push(FileRecord {
                    fid: entry.fid,
                    name: entry.name.clone(),
                    data,
                });
            }
            Ok(_) => failures.push(FileFailure {
                fid: entry.fid,
                name: entry.name.clone(),
                error: Error::EmptyFile { fid: entry.fid },
            }),
            Err(e) if e.is_session_failure() => return Err(e),
            Err(e) => {
                debug!("{} ({}): {}", entry.name, entry.fid, e);
                failures.push(FileFailure {
                    fid: entry.fid,
                    name: entry.name.clone(),
                    error: e,
                });
            }
        }
    }

    Ok(ApplicationRecord {
        aid: aid.clone(),
        select_response,
        files,
        failures,
    })
}

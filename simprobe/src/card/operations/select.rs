// simprobe/src/card/operations/select.rs

use log::debug;

use crate::protocol::{self, ResponseApdu, Status};
use crate::session::CardSession;
use crate::types::{Aid, StatusWord};
use crate::{Error, Result};

/// Result of one SELECT-by-name attempt. Every attempt is kept, whatever
/// the status, so callers can show the full log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub aid: Aid,
    pub status: StatusWord,
    pub response: Vec<u8>,
}

impl ProbeOutcome {
    pub fn success(&self) -> bool {
        self.status.is_success()
    }

    pub fn classification(&self) -> Status {
        self.status.classify()
    }
}

/// Try to select `aid`. No retry; the caller decides what to do next.
pub fn probe_aid<S: CardSession + ?Sized>(session: &mut S, aid: &Aid) -> Result<ProbeOutcome> {
    let resp = protocol::select_by_name(aid.as_bytes())?.send(session)?;
    let outcome = ProbeOutcome {
        aid: aid.clone(),
        status: resp.status_word(),
        response: resp.data,
    };
    match outcome.classification() {
        Status::Success => debug!("{}: application found", aid),
        Status::NotFound => debug!("{}: application not present", aid),
        _ => debug!("{}: status {}", aid, outcome.status),
    }
    Ok(outcome)
}

/// SELECT with an empty name, answered by the card's default application.
pub fn probe_default_application<S: CardSession + ?Sized>(session: &mut S) -> Result<ResponseApdu> {
    protocol::select_default().send(session)
}

/// Select `aid` and return its SELECT response, or `SelectFailed`.
pub fn select_application<S: CardSession + ?Sized>(session: &mut S, aid: &Aid) -> Result<Vec<u8>> {
    let outcome = probe_aid(session, aid)?;
    if outcome.success() {
        Ok(outcome.response)
    } else {
        Err(Error::SelectFailed {
            aid: aid.to_hex(),
            status: outcome.status,
        })
    }
}

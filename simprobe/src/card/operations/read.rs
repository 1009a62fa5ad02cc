// simprobe/src/card/operations/read.rs

use log::debug;

use crate::protocol::{self, Status};
use crate::session::CardSession;
use crate::types::Fid;
use crate::{Error, Result};

/// Select `fid` under the current application and read it from offset 0.
///
/// The card context must be established right before READ BINARY, so the
/// SELECT is always reissued.
pub fn read_file<S: CardSession + ?Sized>(session: &mut S, fid: Fid) -> Result<Vec<u8>> {
    let resp = protocol::select_by_id(fid.as_u16()).send(session)?;
    if !resp.is_success() {
        debug!("select {} -> {}", fid, resp.status_word());
        return Err(Error::FileNotSelectable {
            fid,
            status: resp.status_word(),
        });
    }
    read_binary_at(session, 0, 0)
}

/// READ BINARY on the already selected file.
///
/// `6C xx` is answered with exactly one reissue using Le = xx; whatever the
/// card says then is final.
pub fn read_binary_at<S: CardSession + ?Sized>(
    session: &mut S,
    offset: u16,
    length: u16,
) -> Result<Vec<u8>> {
    let resp = protocol::read_binary(offset, length)?.send(session)?;
    match resp.status() {
        Status::Success => Ok(resp.data),
        Status::WrongLength(n) => {
            let exact = if n == 0 { 256 } else { n as u16 };
            debug!("read binary at {:#06x}: card wants {} bytes", offset, exact);
            let retry = protocol::read_binary(offset, exact)?.send(session)?;
            if retry.is_success() {
                Ok(retry.data)
            } else {
                Err(Error::ReadFailed {
                    status: retry.status_word(),
                })
            }
        }
        _ => Err(Error::ReadFailed {
            status: resp.status_word(),
        }),
    }
}

/// Fetch `length` pending response bytes (after a `61 xx`).
pub fn get_response<S: CardSession + ?Sized>(session: &mut S, length: u16) -> Result<Vec<u8>> {
    let resp = protocol::get_response(length)?.send(session)?;
    if resp.is_success() {
        Ok(resp.data)
    } else {
        Err(Error::ReadFailed {
            status: resp.status_word(),
        })
    }
}

/// GET DATA for a 16-bit tag, independent of the selected file.
///
/// Handles one `6C xx` reissue and one `61 xx` GET RESPONSE.
pub fn get_data<S: CardSession + ?Sized>(session: &mut S, tag: u16) -> Result<Vec<u8>> {
    let mut resp = protocol::get_data(tag).send(session)?;
    if let Status::WrongLength(n) = resp.status() {
        debug!("get data {:04X}: card wants {} bytes", tag, n);
        resp = protocol::get_data_with_le(tag, n as u16)?.send(session)?;
    }

    if let Some(pending) = resp.status_word().more_data() {
        let mut data = resp.data;
        data.extend(get_response(session, pending)?);
        return Ok(data);
    }

    if resp.is_success() {
        Ok(resp.data)
    } else {
        Err(Error::ReadFailed {
            status: resp.status_word(),
        })
    }
}

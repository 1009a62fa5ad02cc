//! Probe the card in the first PC/SC reader and print what was found.
//!
//! Usage:
//!   cargo run -p simprobe --example stk_probe --features pcsc -- [aid.txt]

use anyhow::Context;
use simprobe::config::{ScanConfig, load_aid_list};
use simprobe::session::{PcscSession, ProtocolPreference};
use simprobe::stk::MenuDecode;
use simprobe::{scan, utils};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    for reader in PcscSession::list_readers()? {
        println!("reader: {}", reader);
    }

    let mut builder = ScanConfig::builder();
    if let Some(path) = std::env::args().nth(1) {
        let entries =
            load_aid_list(&path).with_context(|| format!("loading AID list {}", path))?;
        println!("loaded {} AIDs from {}", entries.len(), path);
        builder = builder.with_aid_list(&entries);
    }

    let mut session =
        PcscSession::open_first(ProtocolPreference::Auto).context("opening first reader")?;
    println!("connected: {}", session.reader_name());

    let report = scan(&mut session, builder.build())?;
    println!("ATR: {}", utils::bytes_to_hex_spaced(&report.atr));

    if let Some(default) = &report.default_application {
        println!("default application: {}", default.status);
    }
    match &report.directory {
        Some(Ok(listing)) => println!("EF_DIR: {} application(s)", listing.aids.len()),
        Some(Err(e)) => println!("EF_DIR: {}", e),
        None => {}
    }
    for outcome in &report.candidates {
        println!("  {} -> {}", outcome.aid, outcome.status);
    }

    for app in &report.applications {
        println!("application {}", app.aid);
        for file in &app.files {
            println!("  {} {} [{}]", file.fid, file.name, file.to_hex());
        }
        for failure in &app.failures {
            println!("  {} {}: {}", failure.fid, failure.name, failure.error);
        }
        match app.menu() {
            Some(MenuDecode::Entries { entries, truncated_at }) => {
                for e in &entries {
                    println!("  menu item {} (type {:02X}): {}", e.id, e.kind, e.name);
                }
                if let Some(offset) = truncated_at {
                    println!("  menu truncated at offset {}", offset);
                }
            }
            Some(MenuDecode::Fallback(spans)) => {
                for s in &spans {
                    println!("  text @{}..={}: {}", s.start, s.end, s.text);
                }
            }
            Some(MenuDecode::Empty) | None => {}
        }
    }
    for failure in &report.application_failures {
        println!("application {}: {}", failure.aid, failure.error);
    }

    for obj in &report.data_objects {
        match &obj.result {
            Ok(data) => println!("{} ({:04X}): {}", obj.label, obj.tag, utils::bytes_to_hex(data)),
            Err(e) => println!("{} ({:04X}): {}", obj.label, obj.tag, e),
        }
    }
    Ok(())
}

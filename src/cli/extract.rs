//! `extract` command: show the namespaces active for a URL.

use std::io::Write;

use anyhow::Result;

use super::LocationArgs;
use super::common::Session;
use crate::config::NsConfig;
use crate::router::ActiveNamespaces;

/// Print the active namespaces of `location`.
pub fn run_extract(
    config: &NsConfig,
    location: &LocationArgs,
    json: bool,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::open(config, location)?;
    session.render();

    let Some(active) = session.router.active() else {
        return Ok(());
    };

    if json {
        write_json(out, active, pretty)
    } else {
        write_text(out, active)
    }
}

fn write_json(out: &mut impl Write, active: &ActiveNamespaces, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, active)?;
    } else {
        serde_json::to_writer(&mut *out, active)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_text(out: &mut impl Write, active: &ActiveNamespaces) -> Result<()> {
    writeln!(out, "namespace: {}", active.current_namespace)?;
    for (slot, value) in active.slots.iter().enumerate() {
        writeln!(out, "slot {slot}: {}", value.as_deref().unwrap_or("-"))?;
    }
    Ok(())
}

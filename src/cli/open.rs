//! `open` command: switch one namespace slot of a URL.

use std::io::Write;

use anyhow::Result;

use super::LocationArgs;
use super::common::Session;
use crate::config::NsConfig;
use crate::debug;

/// Apply `value` to `slot` of `location` and print the new route.
pub fn run_open(
    config: &NsConfig,
    location: &LocationArgs,
    slot: usize,
    value: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::open(config, location)?;
    let before = session.url();

    let url = session.router.open_namespace(&mut session.host, value, slot)?;
    debug!("open"; "{} → {}", before, url);

    writeln!(out, "{}", session.url())?;
    Ok(())
}

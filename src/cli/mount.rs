//! `mount` command: run the mount sequence for a URL.

use std::io::Write;

use anyhow::Result;

use super::LocationArgs;
use super::common::{Session, write_controls};
use crate::config::NsConfig;
use crate::log;

/// Mount the router at `location`, print the resulting route and controls.
pub fn run_mount(config: &NsConfig, location: &LocationArgs, out: &mut impl Write) -> Result<()> {
    let mut session = Session::open(config, location)?;

    match session.router.mount(&mut session.host) {
        Some(url) => log!("mount"; "redirected to {}", url),
        None => log!("mount"; "keeping {}", session.url()),
    }

    writeln!(out, "{}", session.url())?;
    write_controls(out, &session.host)?;
    Ok(())
}

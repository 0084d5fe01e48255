//! `rewrite` command: prefix sidebar links with the active namespace.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::LocationArgs;
use super::common::Session;
use crate::config::NsConfig;
use crate::{debug, debug_do};

/// Rewrite sidebar markup read from `input` (stdin for `None` or `-`).
pub fn run_rewrite(
    config: &NsConfig,
    location: &LocationArgs,
    input: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let html = read_input(input)?;
    rewrite_markup(config, location, &html, out)
}

/// Render one cycle at `location` and write the rewritten `html`.
pub fn rewrite_markup(
    config: &NsConfig,
    location: &LocationArgs,
    html: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::open(config, location)?;
    session.render();

    debug_do! {
        if let Some(prefix) = session.router.current_namespace() {
            debug!("rewrite"; "prefix {}", prefix);
        }
    }

    out.write_all(session.router.sidebar(html).as_bytes())?;
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read stdin")?;
            Ok(html)
        }
    }
}

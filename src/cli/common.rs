//! Common utilities shared across CLI commands.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::NsConfig;
use crate::core::{Host, MemoryHost};
use crate::router::NamespaceRouter;

use super::LocationArgs;

/// Router plus an in-memory host positioned at the requested location.
pub struct Session {
    pub router: NamespaceRouter,
    pub host: MemoryHost,
}

impl Session {
    /// Build the router from `config` and place the host at `location`.
    ///
    /// Every configured selector is registered on the host so that output
    /// lists controls even when the router leaves them untouched.
    pub fn open(config: &NsConfig, location: &LocationArgs) -> Result<Self> {
        let router = NamespaceRouter::new(config.namespaces.clone())
            .context("failed to build namespace pattern")?;

        let mut host = MemoryHost::from_url(config.router.mode, &location.url)?;
        for selector in config.namespaces.iter().filter_map(|ns| ns.selector.as_deref()) {
            host = host.with_control(selector);
        }

        Ok(Self { router, host })
    }

    /// Run one render cycle so the router knows the active namespace.
    pub fn render(&mut self) {
        self.router.after_each(&mut self.host, String::new());
    }

    /// Current route of the host.
    pub fn url(&self) -> String {
        self.host.current_url()
    }
}

/// Print `selector = value` for every control.
pub fn write_controls(out: &mut impl Write, host: &MemoryHost) -> Result<()> {
    for (selector, value) in host.controls() {
        writeln!(out, "{selector} = {value}")?;
    }
    Ok(())
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Two-slot config: required language with default, optional version.
#[cfg(test)]
pub fn test_config(mode: crate::core::RoutingMode) -> NsConfig {
    use crate::config::NamespaceConfig;

    let mut config = NsConfig::default();
    config.router.mode = mode;
    config.namespaces = vec![
        NamespaceConfig::new(["en", "fr"])
            .with_default("en")
            .with_selector("#lang"),
        NamespaceConfig::new(["v1", "v2"])
            .optional(true)
            .with_selector("#version"),
    ];
    config
}

#[cfg(test)]
pub fn test_location(url: &str) -> LocationArgs {
    LocationArgs {
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoutingMode;

    #[test]
    fn test_session_registers_controls() {
        let session = Session::open(&test_config(RoutingMode::Hash), &test_location("/")).unwrap();
        assert_eq!(session.url(), "#/");
        assert_eq!(session.host.controls().len(), 2);
    }

    #[test]
    fn test_session_render() {
        let mut session =
            Session::open(&test_config(RoutingMode::History), &test_location("/fr/v1/x")).unwrap();
        session.render();
        assert_eq!(session.router.current_namespace(), Some("/fr/v1/"));
    }

    #[test]
    fn test_write_controls() {
        let mut session =
            Session::open(&test_config(RoutingMode::History), &test_location("/fr/x")).unwrap();
        session.render();

        let mut out = Vec::new();
        write_controls(&mut out, &session.host).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#lang = fr\n#version = \n");
    }

    #[test]
    fn test_session_invalid_url() {
        let result = Session::open(&test_config(RoutingMode::Hash), &test_location("http://[::1"));
        assert!(result.is_err());
    }
}

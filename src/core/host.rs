//! Host renderer services consumed by the namespace router.
//!
//! The router never touches a browser directly. Everything it needs from the
//! surrounding renderer goes through [`Host`]:
//!
//! | Service             | Browser counterpart                         |
//! |---------------------|---------------------------------------------|
//! | `mode`              | router mode flag (hash vs history)          |
//! | `current_url`       | `location.hash` / `location.pathname`       |
//! | `navigate`          | assigning `location.hash` / `location.href` |
//! | `set_control_value` | `select.value = ...` on a bound control     |
//!
//! [`MemoryHost`] is the in-memory implementation used by the CLI and tests.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use super::RoutingMode;

/// Services the host renderer provides to the router.
pub trait Host {
    /// Active routing mode.
    fn mode(&self) -> RoutingMode;

    /// Current route: the fragment (`#/en/guide`) in hash mode, the path
    /// (`/en/guide`) otherwise.
    fn current_url(&self) -> String;

    /// Write a route to the active location target.
    fn navigate(&mut self, url: &str);

    /// Set the displayed value of the control bound to `selector`.
    fn set_control_value(&mut self, selector: &str, value: &str);
}

// ============================================================================
// MemoryHost
// ============================================================================

/// In-memory host: a location plus a set of named controls.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryHost {
    mode: RoutingMode,
    /// Current route in the form `current_url` returns it.
    location: String,
    /// Displayed value per control selector.
    controls: BTreeMap<String, String>,
    /// Every route passed to `navigate`, oldest first.
    history: Vec<String>,
}

impl MemoryHost {
    /// Create a host positioned at `route` (a fragment or a path).
    pub fn new(mode: RoutingMode, route: &str) -> Self {
        Self {
            mode,
            location: normalize_route(mode, route),
            controls: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    /// Create a host from a full URL (`https://docs.dev/#/en/`) or a bare
    /// route (`/en/guide`, `#/en/`).
    pub fn from_url(mode: RoutingMode, input: &str) -> Result<Self> {
        let input = input.trim();
        if !crate::core::is_external_link(input) {
            return Ok(Self::new(mode, input));
        }

        let parsed =
            url::Url::parse(input).with_context(|| format!("invalid URL `{input}`"))?;
        let route = match mode {
            RoutingMode::Hash => format!("#{}", parsed.fragment().unwrap_or_default()),
            RoutingMode::History => parsed.path().to_string(),
        };
        Ok(Self::new(mode, &route))
    }

    /// Register a control so it shows up in [`Self::controls`] before the
    /// router writes to it.
    pub fn with_control(mut self, selector: impl Into<String>) -> Self {
        self.controls.entry(selector.into()).or_default();
        self
    }

    /// Displayed value of a control, if the control was ever set.
    pub fn control(&self, selector: &str) -> Option<&str> {
        self.controls.get(selector).map(String::as_str)
    }

    pub fn controls(&self) -> &BTreeMap<String, String> {
        &self.controls
    }

    /// Routes navigated to, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Host for MemoryHost {
    fn mode(&self) -> RoutingMode {
        self.mode
    }

    fn current_url(&self) -> String {
        self.location.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.location = normalize_route(self.mode, url);
        self.history.push(self.location.clone());
    }

    fn set_control_value(&mut self, selector: &str, value: &str) {
        self.controls.insert(selector.to_string(), value.to_string());
    }
}

/// Bring a route into the shape the browser reports it in.
///
/// Hash mode: always `#`-prefixed; an empty fragment reads as `#/`, which is
/// what the renderer normalizes a fresh page load to.
/// History mode: the path component only, query and fragment stripped.
fn normalize_route(mode: RoutingMode, route: &str) -> String {
    match mode {
        RoutingMode::Hash => {
            let fragment = route.strip_prefix('#').unwrap_or(route);
            if fragment.is_empty() {
                "#/".to_string()
            } else {
                format!("#{fragment}")
            }
        }
        RoutingMode::History => {
            let path = route.split(['?', '#']).next().unwrap_or(route);
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        }
    }
}

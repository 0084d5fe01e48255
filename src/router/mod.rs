//! Namespace router.
//!
//! Keeps namespace segments (language, version, ...) in the route of a
//! client-side documentation renderer.
//!
//! | Module     | Purpose                                             |
//! |------------|-----------------------------------------------------|
//! | `segments` | Insert / replace / remove the token of a slot       |
//! | `pattern`  | Combined regex deriving all active slots at once    |
//! | `links`    | Prefix sidebar links with the active namespace      |
//!
//! # Lifecycle
//!
//! ```text
//! mount ──▶ after_each ──▶ after_each ──▶ ...
//!   │           │
//!   │           └─ extract route → sync controls → keep current namespace
//!   └─ sync controls → inject defaults → redirect bare root
//! ```
//!
//! Selector change events go through [`NamespaceRouter::on_select_change`];
//! generated sidebar markup through [`NamespaceRouter::sidebar`].

mod links;
mod pattern;
mod segments;

pub use links::{rewrite_href, rewrite_links};
pub use pattern::{ActiveNamespaces, NamespacePattern};
pub use segments::{UrlSegments, update_segment};

use std::borrow::Cow;

use thiserror::Error;

use crate::config::NamespaceConfig;
use crate::core::Host;
use crate::debug;

/// Router errors.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid namespace pattern")]
    Pattern(#[from] regex::Error),

    #[error("no namespace slot {slot} (configured: {count})")]
    UnknownSlot { slot: usize, count: usize },
}

/// Namespace router bound to one namespace list.
#[derive(Debug, Clone)]
pub struct NamespaceRouter {
    namespaces: Vec<NamespaceConfig>,
    pattern: NamespacePattern,
    /// Result of the latest render cycle, `None` before the first one.
    active: Option<ActiveNamespaces>,
}

impl NamespaceRouter {
    /// Create a router and build its extraction pattern.
    pub fn new(namespaces: Vec<NamespaceConfig>) -> Result<Self, RouterError> {
        let pattern = NamespacePattern::new(&namespaces)?;
        debug!("mount"; "namespace pattern: {}", pattern.as_str());
        Ok(Self {
            namespaces,
            pattern,
            active: None,
        })
    }

    pub fn namespaces(&self) -> &[NamespaceConfig] {
        &self.namespaces
    }

    pub fn pattern(&self) -> &NamespacePattern {
        &self.pattern
    }

    /// Namespaces of the latest render cycle.
    pub fn active(&self) -> Option<&ActiveNamespaces> {
        self.active.as_ref()
    }

    /// Namespace prefix of the latest render cycle (`/en/`, `#/en/`, `/`).
    pub fn current_namespace(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.current_namespace.as_str())
    }

    // ========================================================================
    // Lifecycle hooks
    // ========================================================================

    /// Run once after the renderer is set up.
    ///
    /// Shows each slot's default on its control and injects the default into
    /// the route when the slot is empty. Namespaces without a selector are
    /// skipped entirely, default or not. The host only navigates when the
    /// route is the bare root, so deep links keep their exact URL.
    ///
    /// Returns the route navigated to, if any.
    pub fn mount<H: Host>(&self, host: &mut H) -> Option<String> {
        let mut segments = UrlSegments::parse(&host.current_url());
        let load_default = segments.is_root();

        for (slot, namespace) in self.namespaces.iter().enumerate() {
            let (Some(selector), Some(default)) =
                (&namespace.selector, namespace.default_value())
            else {
                continue;
            };

            host.set_control_value(selector, default);

            if !namespace.contains(segments.slot(slot)) {
                segments.update(namespace, slot, Some(default));
            }
        }

        if !load_default {
            return None;
        }

        let url = segments.join();
        debug!("mount"; "loading default namespace: {}", url);
        self.navigate(host, &url);
        Some(url)
    }

    /// Run after every render with the rendered markup.
    ///
    /// Derives the active namespaces from the current route, mirrors them
    /// onto bound controls, and hands the markup back unchanged for the
    /// next stage of the render pipeline.
    pub fn after_each<H: Host>(&mut self, host: &mut H, html: String) -> String {
        let url = host.current_url();
        let active = self.pattern.extract(&url);

        for (slot, namespace) in self.namespaces.iter().enumerate() {
            if let Some(selector) = &namespace.selector {
                host.set_control_value(selector, active.value(slot));
            }
        }

        debug!("extract"; "{} → {}", url, active.current_namespace);
        self.active = Some(active);
        html
    }

    /// Selector `change` handler: switch `slot` to `value`.
    pub fn on_select_change<H: Host>(
        &self,
        host: &mut H,
        slot: usize,
        value: &str,
    ) -> Result<String, RouterError> {
        self.open_namespace(host, Some(value), slot)
    }

    /// Post-process generated sidebar markup.
    pub fn sidebar<'a>(&self, html: &'a str) -> Cow<'a, str> {
        match self.current_namespace() {
            Some(prefix) => rewrite_links(html, prefix),
            None => Cow::Borrowed(html),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Set, replace or clear the token of `slot` in the current route and
    /// navigate there.
    ///
    /// Returns the new route.
    pub fn open_namespace<H: Host>(
        &self,
        host: &mut H,
        value: Option<&str>,
        slot: usize,
    ) -> Result<String, RouterError> {
        let namespace = self.namespaces.get(slot).ok_or(RouterError::UnknownSlot {
            slot,
            count: self.namespaces.len(),
        })?;

        let mut segments = UrlSegments::parse(&host.current_url());
        segments.update(namespace, slot, value);

        let url = segments.join();
        self.navigate(host, &url);
        Ok(url)
    }

    /// Write `url` to the host location.
    pub fn navigate<H: Host>(&self, host: &mut H, url: &str) {
        debug!("navigate"; "{} ({} mode)", url, host.mode());
        host.navigate(url);
    }
}

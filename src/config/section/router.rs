//! `[router]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [router]
//! mode = "hash"     # "hash" (#/en/guide) or "history" (/en/guide)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::RoutingMode;

/// Host router settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Where the renderer keeps the active route.
    pub mode: RoutingMode,
}

//! Routing mode of the host renderer.

use serde::{Deserialize, Serialize};

/// Where the renderer keeps the active route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// Route lives in the URL fragment (`https://site/#/en/guide`).
    #[default]
    Hash,

    /// Route lives in the URL path (`https://site/en/guide`).
    History,
}

impl RoutingMode {
    #[inline]
    pub const fn is_hash(self) -> bool {
        matches!(self, Self::Hash)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::History => "history",
        }
    }
}

impl std::fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

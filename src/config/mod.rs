//! Namespace router configuration (`nsroute.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── namespace  # [[namespaces]]
//! │   └── router     # [router]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # NsConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[router]`       | Routing mode of the host renderer              |
//! | `[[namespaces]]` | Namespace slots (values, optional, default...) |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{NamespaceConfig, RouterConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nsroute.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Host router settings
    #[serde(default)]
    pub router: RouterConfig,

    /// Namespace slots, in URL order
    #[serde(default)]
    pub namespaces: Vec<NamespaceConfig>,
}

impl NsConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file, then applies CLI
    /// overrides and validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file '{}' not found in the current directory or any parent",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.apply_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply command-line overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        if let Some(mode) = cli.mode {
            self.router.mode = mode;
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Only a config without any namespace is rejected. Inconsistent
    /// namespace entries are printed as warnings and kept.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Collect all diagnostics without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.namespaces.is_empty() {
            diag.error_with_hint(
                FieldPath::new("namespaces"),
                "no namespaces configured",
                "add at least one [[namespaces]] table with a `values` list",
            );
        }

        for (index, namespace) in self.namespaces.iter().enumerate() {
            namespace.validate(index, &mut diag);
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> NsConfig {
    let (parsed, ignored) = NsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoutingMode;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = NsConfig::from_str("[router\nmode = \"hash\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default() {
        let config = NsConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.router.mode, RoutingMode::Hash);
        assert!(config.namespaces.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[[namespaces]]\nvalues = [\"en\"]\nlabel = \"Language\"";
        let (config, ignored) = NsConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.namespaces[0].values, ["en"]);
        assert!(ignored.iter().any(|f| f.contains("label")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[router]\nmode = \"hash\"\n[[namespaces]]\nvalues = [\"en\"]";
        let (_, ignored) = NsConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_requires_namespaces() {
        let config = test_parse_config("[router]\nmode = \"history\"");
        let diag = config.diagnostics();
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "namespaces");
    }

    #[test]
    fn test_validate_keeps_inconsistent_default() {
        let config = test_parse_config(
            "[[namespaces]]\nvalues = [\"en\"]\ndefault = \"fr\"\nselector = \"#lang\"",
        );
        let diag = config.diagnostics();
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nsroute.toml");
        fs::write(&path, "[[namespaces]]\nvalues = [\"en\", \"fr\"]\n").unwrap();

        let config = NsConfig::from_path(&path).unwrap();
        assert_eq!(config.namespaces.len(), 1);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NsConfig::from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}

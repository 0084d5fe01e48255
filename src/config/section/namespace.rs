//! `[[namespaces]]` configuration.
//!
//! One entry per URL slot, in slot order: the first entry owns the first
//! path segment, the second entry the segment after it, and so on.
//!
//! # Example
//!
//! ```toml
//! [[namespaces]]
//! values = ["en", "fr"]       # Tokens valid for this slot
//! default = "en"              # Applied when the URL carries none
//! selector = "#lang-select"   # Control kept in sync with the slot
//!
//! [[namespaces]]
//! values = ["v1", "v2"]
//! optional = true             # Slot may be absent from the URL
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// One namespace slot definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Tokens valid for this slot, in order.
    pub values: Vec<String>,

    /// Whether the slot may be absent from the URL.
    pub optional: bool,

    /// Token applied when the URL carries none for this slot.
    pub default: Option<String>,

    /// Query selector of the control bound to this slot.
    pub selector: Option<String>,
}

impl NamespaceConfig {
    /// Create a required namespace from its tokens.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Whether `token` is one of this slot's values.
    ///
    /// `None` (no segment at that position) is never a member.
    #[inline]
    pub fn contains(&self, token: Option<&str>) -> bool {
        token.is_some_and(|token| self.values.iter().any(|v| v == token))
    }

    /// Non-empty default token, if any.
    #[inline]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|v| !v.is_empty())
    }

    /// Report entries the router will accept but probably not route as meant.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let path = FieldPath::new("namespaces").index(index);

        if self.values.is_empty() {
            diag.warn_with_hint(
                path.clone().field("values"),
                "no tokens listed, this slot can never be occupied",
                "list the tokens for this slot, e.g. values = [\"en\", \"fr\"]",
            );
        }

        for (i, value) in self.values.iter().enumerate() {
            let field = path.clone().field("values").index(i);
            if value.is_empty() {
                diag.warn(field, "empty token matches the empty segment of a bare root URL");
            } else if value.contains('/') {
                diag.warn_with_hint(
                    field,
                    format!("token `{value}` spans more than one path segment"),
                    "a namespace token occupies exactly one segment",
                );
            } else if self.values[..i].contains(value) {
                diag.warn(field, format!("duplicate token `{value}`"));
            }
        }

        if let Some(default) = &self.default
            && !self.values.contains(default)
        {
            diag.warn_with_hint(
                path.clone().field("default"),
                format!("default `{default}` is not one of the slot's values"),
                format!("use one of: {}", self.values.join(", ")),
            );
        }

        if self.default.is_some() && self.selector.is_none() {
            diag.warn_with_hint(
                path.field("default"),
                "default is ignored without a selector",
                "bind the slot to a control with selector = \"#...\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_namespaces() {
        let config = test_parse_config(
            r##"
[[namespaces]]
values = ["en", "fr"]
default = "en"
selector = "#lang"

[[namespaces]]
values = ["v1", "v2"]
optional = true
"##,
        );

        assert_eq!(config.namespaces.len(), 2);
        assert_eq!(
            config.namespaces[0],
            NamespaceConfig::new(["en", "fr"])
                .with_default("en")
                .with_selector("#lang")
        );
        assert_eq!(
            config.namespaces[1],
            NamespaceConfig::new(["v1", "v2"]).optional(true)
        );
    }

    #[test]
    fn test_contains() {
        let ns = NamespaceConfig::new(["en", "fr"]);
        assert!(ns.contains(Some("en")));
        assert!(!ns.contains(Some("de")));
        assert!(!ns.contains(Some("")));
        assert!(!ns.contains(None));
    }

    #[test]
    fn test_default_value_ignores_empty() {
        assert_eq!(NamespaceConfig::new(["en"]).with_default("").default_value(), None);
        assert_eq!(
            NamespaceConfig::new(["en"]).with_default("en").default_value(),
            Some("en")
        );
    }

    #[test]
    fn test_validate_default_not_in_values() {
        let mut diag = ConfigDiagnostics::new();
        NamespaceConfig::new(["en", "fr"])
            .with_default("de")
            .with_selector("#lang")
            .validate(0, &mut diag);

        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "namespaces[0].default");
    }

    #[test]
    fn test_validate_bad_tokens() {
        let mut diag = ConfigDiagnostics::new();
        NamespaceConfig::new(["en", "", "a/b", "en"]).validate(3, &mut diag);

        let fields: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "namespaces[3].values[1]",
                "namespaces[3].values[2]",
                "namespaces[3].values[3]"
            ]
        );
    }

    #[test]
    fn test_validate_empty_values() {
        let mut diag = ConfigDiagnostics::new();
        NamespaceConfig::default().validate(0, &mut diag);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].hint.is_some());
    }

    #[test]
    fn test_validate_clean_entry() {
        let mut diag = ConfigDiagnostics::new();
        NamespaceConfig::new(["en", "fr"])
            .with_default("fr")
            .with_selector("#lang")
            .validate(0, &mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_default_without_selector() {
        let mut diag = ConfigDiagnostics::new();
        NamespaceConfig::new(["en", "fr"])
            .with_default("en")
            .validate(1, &mut diag);

        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "namespaces[1].default");
        assert!(diag.warnings()[0].message.contains("selector"));
    }
}

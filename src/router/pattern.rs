//! Combined namespace extraction pattern.
//!
//! All namespaces are matched by a single regex built at mount time:
//!
//! ```text
//! [{en,fr}, {v1,v2} optional]  →  ^#?/(?:(en|fr)/)(?:(v1|v2)/)?
//! ```
//!
//! Capture group `i + 1` holds the token of slot `i`. An optional slot that
//! is absent leaves its group unmatched; a missing required slot fails the
//! whole match. The full match is the namespace prefix of the route
//! (`/en/v1/`, `#/en/`).

use regex::Regex;
use serde::Serialize;

use crate::config::NamespaceConfig;

/// Namespace state derived from one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveNamespaces {
    /// Matched token per slot, `None` when unmatched.
    pub slots: Vec<Option<String>>,

    /// Full matched prefix (`/en/`, `#/en/v1/`), or `/` when nothing matched.
    pub current_namespace: String,
}

impl ActiveNamespaces {
    /// Token of `slot`, or `""` when unmatched (the value shown on controls).
    #[inline]
    pub fn value(&self, slot: usize) -> &str {
        self.slots
            .get(slot)
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    /// Whether any slot carries a token.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }
}

/// The combined regex for a namespace list.
#[derive(Debug, Clone)]
pub struct NamespacePattern {
    regex: Regex,
    slots: usize,
}

impl NamespacePattern {
    /// Build the pattern for `namespaces`, one group per entry in order.
    pub fn new(namespaces: &[NamespaceConfig]) -> Result<Self, regex::Error> {
        let source = Self::source(namespaces);
        Ok(Self {
            regex: Regex::new(&source)?,
            slots: namespaces.len(),
        })
    }

    /// Regex source for `namespaces`. Tokens are escaped literally.
    pub fn source(namespaces: &[NamespaceConfig]) -> String {
        let mut source = String::from("^#?/");
        for namespace in namespaces {
            let alternatives: Vec<_> = namespace.values.iter().map(|v| regex::escape(v)).collect();
            source.push_str("(?:(");
            source.push_str(&alternatives.join("|"));
            source.push_str(")/)");
            if namespace.optional {
                source.push('?');
            }
        }
        source
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of slots (capture groups besides the full match).
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Match `url` and collect the active namespaces.
    pub fn extract(&self, url: &str) -> ActiveNamespaces {
        match self.regex.captures(url) {
            Some(caps) => ActiveNamespaces {
                slots: (1..=self.slots)
                    .map(|group| caps.get(group).map(|m| m.as_str().to_string()))
                    .collect(),
                current_namespace: caps[0].to_string(),
            },
            None => ActiveNamespaces {
                slots: vec![None; self.slots],
                current_namespace: "/".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> NamespacePattern {
        NamespacePattern::new(&[
            NamespaceConfig::new(["en", "fr"]),
            NamespaceConfig::new(["v1", "v2"]).optional(true),
        ])
        .unwrap()
    }

    #[test]
    fn test_source() {
        assert_eq!(pattern().as_str(), r"^#?/(?:(en|fr)/)(?:(v1|v2)/)?");
        assert_eq!(pattern().slots(), 2);
    }

    #[test]
    fn test_source_escapes_tokens() {
        let source = NamespacePattern::source(&[NamespaceConfig::new(["v1.0", "v2.0"])]);
        assert_eq!(source, r"^#?/(?:(v1\.0|v2\.0)/)");
    }

    #[test]
    fn test_extract_both_slots() {
        let active = pattern().extract("/en/v1/guide");
        assert_eq!(active.slots, [Some("en".to_string()), Some("v1".to_string())]);
        assert_eq!(active.current_namespace, "/en/v1/");
    }

    #[test]
    fn test_extract_optional_slot_absent() {
        let active = pattern().extract("/en/guide");
        assert_eq!(active.slots, [Some("en".to_string()), None]);
        assert_eq!(active.value(1), "");
        assert_eq!(active.current_namespace, "/en/");
    }

    #[test]
    fn test_extract_hash_route() {
        let active = pattern().extract("#/fr/v2/api");
        assert_eq!(active.value(0), "fr");
        assert_eq!(active.value(1), "v2");
        assert_eq!(active.current_namespace, "#/fr/v2/");
    }

    #[test]
    fn test_extract_no_match() {
        let active = pattern().extract("/guide");
        assert_eq!(active.slots, [None, None]);
        assert!(!active.is_matched());
        assert_eq!(active.current_namespace, "/");
    }

    #[test]
    fn test_extract_requires_trailing_slash() {
        // `/en` alone has no segment boundary after the token
        assert_eq!(pattern().extract("/en").current_namespace, "/");
    }

    #[test]
    fn test_extract_anchored_at_start() {
        assert!(!pattern().extract("/docs/en/guide").is_matched());
    }

    #[test]
    fn test_value_out_of_range() {
        assert_eq!(pattern().extract("/en/").value(7), "");
    }
}

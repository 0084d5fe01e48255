//! Slash-delimited URL segments and namespace slot editing.
//!
//! A route is split on `/`. Index 0 holds whatever precedes the first slash
//! (`""` for `/en/guide`, `"#"` for `#/en/guide`), so namespace slot `i`
//! always sits at index `i + 1`:
//!
//! ```text
//! #/en/v1/guide  →  ["#", "en", "v1", "guide"]
//!                          slot 0  slot 1
//! ```

use crate::config::NamespaceConfig;

/// A route split into its `/`-separated segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlSegments(Vec<String>);

impl UrlSegments {
    /// Split a route on `/`.
    pub fn parse(url: &str) -> Self {
        Self(url.split('/').map(str::to_string).collect())
    }

    /// Segment at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Token currently at the position of `slot`.
    #[inline]
    pub fn slot(&self, slot: usize) -> Option<&str> {
        self.get(slot + 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the route is the bare site root (`/` or `#/`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.len() == 2 && self.0[1].is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Join back into a route with `/`.
    pub fn join(&self) -> String {
        self.0.join("/")
    }

    /// Set, replace or clear the token of `slot`.
    ///
    /// See [`update_segment`].
    pub fn update(&mut self, namespace: &NamespaceConfig, slot: usize, value: Option<&str>) {
        update_segment(&mut self.0, namespace, slot, value);
    }
}

impl std::fmt::Display for UrlSegments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join())
    }
}

/// Edit the segment at the position of namespace `slot` in place.
///
/// | segment at `slot + 1` | `value`   | effect                         |
/// |-----------------------|-----------|--------------------------------|
/// | one of the values     | non-empty | replaced with `value`          |
/// | one of the values     | empty     | removed, later segments shift  |
/// | anything else         | non-empty | `value` inserted at `slot + 1` |
/// | anything else         | empty     | nothing                        |
///
/// Occupancy is decided only by the token at that position. An empty string
/// counts as no value. Inserting past the end appends.
pub fn update_segment(
    segments: &mut Vec<String>,
    namespace: &NamespaceConfig,
    slot: usize,
    value: Option<&str>,
) {
    let index = slot + 1;
    let value = value.filter(|v| !v.is_empty());
    let occupied = namespace.contains(segments.get(index).map(String::as_str));

    match (occupied, value) {
        (true, Some(value)) => segments[index] = value.to_string(),
        (true, None) => {
            segments.remove(index);
        }
        (false, Some(value)) => segments.insert(index.min(segments.len()), value.to_string()),
        (false, None) => {}
    }
}

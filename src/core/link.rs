//! Link classification utilities.

/// Syntactic classification of sidebar link targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External,
    /// Hash route (`#/guide`). Value is the route without the leading `#/`.
    HashRoute(&'a str),
    /// Pure fragment/anchor link (`#section`).
    Fragment,
    /// Site-root path (`/guide`). Value is the path without the leading `/`.
    SiteRoot(&'a str),
    /// Document-relative path (`guide.md`, `../other`).
    Relative,
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External
        } else if let Some(route) = link.strip_prefix("#/") {
            Self::HashRoute(route)
        } else if link.starts_with('#') {
            Self::Fragment
        } else if let Some(path) = link.strip_prefix('/') {
            Self::SiteRoot(path)
        } else {
            Self::Relative
        }
    }

    /// Route part below the site root, for links that address a route.
    ///
    /// `#/guide` and `/guide` both yield `guide`; other kinds yield `None`.
    #[inline]
    pub const fn route(self) -> Option<&'a str> {
        match self {
            Self::HashRoute(route) | Self::SiteRoot(route) => Some(route),
            _ => None,
        }
    }
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert_eq!(LinkKind::parse("https://example.com"), LinkKind::External);
        assert_eq!(LinkKind::parse("mailto:user@example.com"), LinkKind::External);
    }

    #[test]
    fn test_parse_hash_route() {
        assert!(matches!(
            LinkKind::parse("#/guide"),
            LinkKind::HashRoute("guide")
        ));
        assert!(matches!(LinkKind::parse("#/"), LinkKind::HashRoute("")));
    }

    #[test]
    fn test_parse_fragment() {
        assert_eq!(LinkKind::parse("#section"), LinkKind::Fragment);
        assert_eq!(LinkKind::parse("#"), LinkKind::Fragment);
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/guide/intro"),
            LinkKind::SiteRoot("guide/intro")
        ));
        assert!(matches!(LinkKind::parse("/"), LinkKind::SiteRoot("")));
    }

    #[test]
    fn test_parse_relative() {
        assert_eq!(LinkKind::parse("guide.md"), LinkKind::Relative);
        assert_eq!(LinkKind::parse("../other"), LinkKind::Relative);
        // A colon after a slash is not a scheme
        assert_eq!(LinkKind::parse("docs/a:b"), LinkKind::Relative);
    }

    #[test]
    fn test_route() {
        assert_eq!(LinkKind::parse("#/guide").route(), Some("guide"));
        assert_eq!(LinkKind::parse("/guide").route(), Some("guide"));
        assert_eq!(LinkKind::parse("#guide").route(), None);
        assert_eq!(LinkKind::parse("guide").route(), None);
        assert_eq!(LinkKind::parse("https://x.dev/").route(), None);
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("#/a:b"));
        assert!(!is_external_link(":nothing"));
    }
}

//! Sidebar link rewriting.
//!
//! Sidebar markup is generated without knowing the active namespace, so its
//! route links (`/guide`, `#/guide`) point at the un-namespaced pages. This
//! pass moves them under the current namespace prefix:
//!
//! | href              | prefix   | result             |
//! |-------------------|----------|--------------------|
//! | `#/guide`         | `#/en/`  | `#/en/guide`       |
//! | `/guide`          | `/en/`   | `/en/guide`        |
//! | `#/en/guide`      | `#/en/`  | unchanged          |
//! | `#intro`          | any      | unchanged          |
//! | `https://x.dev/`  | any      | unchanged          |

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::LinkKind;

/// `href="..."` or `href='...'`, quotes matched pairwise.
///
/// An href opened with one quote kind and closed with the other is left
/// untouched.
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=(?:"([^"]+)"|'([^']+)')"#).unwrap());

/// Prefix every route href in `html` with `prefix`.
///
/// Returns `html` unchanged when `prefix` is empty (no namespace resolved
/// yet). Hrefs already starting with `prefix` are left alone, which makes
/// the rewrite idempotent.
pub fn rewrite_links<'a>(html: &'a str, prefix: &str) -> Cow<'a, str> {
    if prefix.is_empty() {
        return Cow::Borrowed(html);
    }

    HREF.replace_all(html, |caps: &Captures| {
        let (quote, href) = match (caps.get(1), caps.get(2)) {
            (Some(m), _) => ('"', m.as_str()),
            (None, Some(m)) => ('\'', m.as_str()),
            (None, None) => return caps[0].to_string(),
        };

        match rewrite_href(href, prefix) {
            Some(rewritten) => format!("href={quote}{rewritten}{quote}"),
            None => caps[0].to_string(),
        }
    })
}

/// Namespaced form of a single href, or `None` to keep it as-is.
pub fn rewrite_href(href: &str, prefix: &str) -> Option<String> {
    if href.starts_with(prefix) {
        return None;
    }
    LinkKind::parse(href)
        .route()
        .map(|route| format!("{prefix}{route}"))
}

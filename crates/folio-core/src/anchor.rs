//! In-page anchor links.

/// Element id an in-page link points at, or `None` for anything that is not
/// a `#fragment` link (including a bare `#`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

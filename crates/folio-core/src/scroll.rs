//! Scroll-position classification: which section is active and whether the
//! scroll-to-top control shows.

/// How far ahead of a section's top the section already counts as active
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;

/// The scroll-to-top control shows once the page is scrolled past this
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Class marking the highlighted nav link
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Class marking the scroll-to-top control as shown
pub const SCROLL_TOP_VISIBLE_CLASS: &str = "visible";

/// A section's id and its top offset within the document
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Result of classifying one scroll position
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSnapshot {
    pub active_section: Option<String>,
    pub scroll_top_visible: bool,
}

/// The last section, in document order, whose top minus the lookahead is at
/// or below `offset`. Sections further down overwrite earlier matches.
pub fn active_section(sections: &[SectionOffset], offset: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if offset >= section.top - SECTION_LOOKAHEAD_PX {
            current = Some(section.id.as_str());
        }
    }
    current.filter(|id| !id.is_empty())
}

/// Strictly past the threshold; exactly 300px stays hidden.
pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD_PX
}

/// Whether a nav link's `href` points at the active section
pub fn nav_link_matches(href: &str, active: Option<&str>) -> bool {
    match active {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

pub fn classify(sections: &[SectionOffset], offset: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        active_section: active_section(sections, offset).map(str::to_string),
        scroll_top_visible: scroll_top_visible(offset),
    }
}

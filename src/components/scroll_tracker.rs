//! Scroll Tracker
//!
//! Highlights the nav link of the section in view and shows the
//! scroll-to-top control once the page is scrolled down. Runs on every
//! native scroll event.

use folio_core::scroll::{self, ACTIVE_LINK_CLASS, SCROLL_TOP_VISIBLE_CLASS};
use folio_core::{FolioResult, PageConfig, SectionOffset};
use gloo::events::EventListener;
use gloo::utils::window;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

pub fn attach(config: &PageConfig) -> FolioResult<()> {
    let selectors = &config.selectors;
    let sections: Vec<HtmlElement> = dom::query_all(&selectors.sections);
    let links: Vec<Element> = dom::query_all(&selectors.nav_link);

    let scroll_top: Option<Element> = match dom::by_id(&selectors.scroll_top_id) {
        Ok(el) => Some(el),
        Err(e) => {
            tracing::warn!("Scroll-to-top control not attached: {}", e);
            None
        }
    };

    if let Some(control) = &scroll_top {
        EventListener::new(control, "click", |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        })
        .forget();
    }

    EventListener::new(&window(), "scroll", move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        // Offsets are read every time: layout can shift after load
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .map(|s| SectionOffset::new(s.id(), f64::from(s.offset_top())))
            .collect();
        let snapshot = scroll::classify(&offsets, offset);

        for link in &links {
            let classes = link.class_list();
            let _ = classes.remove_1(ACTIVE_LINK_CLASS);
            let href = link.get_attribute("href").unwrap_or_default();
            if scroll::nav_link_matches(&href, snapshot.active_section.as_deref()) {
                let _ = classes.add_1(ACTIVE_LINK_CLASS);
            }
        }

        if let Some(control) = &scroll_top {
            let _ = control
                .class_list()
                .toggle_with_force(SCROLL_TOP_VISIBLE_CLASS, snapshot.scroll_top_visible);
        }
    })
    .forget();

    Ok(())
}

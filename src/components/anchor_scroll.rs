//! Anchor Scroll
//!
//! In-page `#id` links scroll smoothly instead of jumping.

use folio_core::{anchor_target, FolioResult, PageConfig};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

pub fn attach(config: &PageConfig) -> FolioResult<()> {
    for anchor in dom::query_all::<Element>(&config.selectors.page_anchor) {
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                if let Some(target) = anchor_target(&href)
                    .and_then(|id| document().get_element_by_id(id))
                {
                    scroll_to(&target);
                }
            },
        )
        .forget();
    }
    Ok(())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

//! Theme Toggle
//!
//! Applies the saved light/dark preference at load and flips it on click.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::theme::THEME_ATTRIBUTE;
use folio_core::{FolioResult, PageConfig, PreferenceStore, Theme};
use gloo::events::EventListener;
use gloo::utils::document;
use web_sys::Element;

use crate::dom;
use crate::storage::BrowserStorage;

pub fn attach(config: &PageConfig) -> FolioResult<()> {
    let prefs = PreferenceStore::load(BrowserStorage);
    // The saved theme applies even if the toggle itself is missing
    apply_theme(prefs.current(), None);

    let toggle: Element = dom::by_id(&config.selectors.theme_toggle_id)?;
    let icon: Option<Element> = dom::query_in(&toggle, "i").ok();
    apply_theme(prefs.current(), icon.as_ref());

    let prefs = Rc::new(RefCell::new(prefs));
    EventListener::new(&toggle, "click", move |_| {
        let theme = prefs.borrow_mut().toggle();
        apply_theme(theme, icon.as_ref());
        tracing::debug!(%theme, "theme toggled");
    })
    .forget();

    Ok(())
}

fn apply_theme(theme: Theme, icon: Option<&Element>) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    if let Some(icon) = icon {
        let classes = icon.class_list();
        let _ = classes.remove_1(theme.stale_icon_class());
        let _ = classes.add_1(theme.icon_class());
    }
}

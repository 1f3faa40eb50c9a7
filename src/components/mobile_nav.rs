//! Mobile Navigation
//!
//! Hamburger toggle for the nav links on small screens. Choosing a link
//! always closes the menu.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::nav::MENU_OPEN_CLASS;
use folio_core::{FolioError, FolioResult, MenuView, NavMenu, PageConfig};
use gloo::events::EventListener;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// The menu's links container and the three icon bars
struct MenuDom {
    links: Element,
    bars: Vec<HtmlElement>,
}

impl MenuDom {
    fn render(&self, view: MenuView) {
        let _ = self
            .links
            .class_list()
            .toggle_with_force(MENU_OPEN_CLASS, view.links_active);

        for (bar, style) in self.bars.iter().zip(view.bars) {
            let css = bar.style();
            let _ = css.set_property("transform", style.transform);
            let _ = css.set_property("opacity", style.opacity);
        }
    }
}

pub fn attach(config: &PageConfig) -> FolioResult<()> {
    let selectors = &config.selectors;
    let toggle: Element = dom::by_id(&selectors.menu_toggle_id)?;
    let links = dom::query(&selectors.nav_links)?;

    let bars: Vec<HtmlElement> = dom::query_all_in(&toggle, "span");
    if bars.len() < 3 {
        return Err(FolioError::MissingElement(format!(
            "#{} needs three span bars, found {}",
            selectors.menu_toggle_id,
            bars.len()
        )));
    }

    let menu = Rc::new(RefCell::new(NavMenu::new()));
    let menu_dom = Rc::new(MenuDom { links, bars });

    {
        let menu = menu.clone();
        let menu_dom = menu_dom.clone();
        EventListener::new(&toggle, "click", move |_| {
            let view = menu.borrow_mut().toggle();
            menu_dom.render(view);
        })
        .forget();
    }

    for link in dom::query_all::<Element>(&selectors.nav_link) {
        let menu = menu.clone();
        let menu_dom = menu_dom.clone();
        EventListener::new(&link, "click", move |_| {
            let view = menu.borrow_mut().close();
            menu_dom.render(view);
        })
        .forget();
    }

    Ok(())
}

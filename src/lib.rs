//! Folio
//!
//! Client-side behavior for a single-page portfolio site, compiled to
//! WebAssembly. The state machines live in `folio-core`; this crate binds
//! them to the page.
//!
//! ## Loading
//!
//! ```html
//! <script type="module">
//!   import init from "./pkg/folio.js";
//!   init();
//! </script>
//! ```
//!
//! Everything attaches from [`start`] once the module is instantiated.

pub mod components;
pub mod config;
pub mod dom;
pub mod logging;
pub mod scheduler;
pub mod storage;

use folio_core::{FolioResult, RevealKind};
use wasm_bindgen::prelude::*;

use crate::components::{
    anchor_scroll, contact_form, mobile_nav, page_chrome, reveal, scroll_tracker, theme_toggle,
    typewriter,
};

/// Module entry point: attach every component to the page.
#[wasm_bindgen(start)]
pub fn start() {
    let (config, config_error) = config::load();
    logging::init(logging::parse_level(&config.log_level));

    if let Some(e) = config_error {
        tracing::warn!("Ignoring page config, using defaults: {}", e);
    }

    page_chrome::greet();

    let selectors = &config.selectors;
    report("keyframes", page_chrome::install_keyframes());
    report("loader", page_chrome::attach_loader(&config));
    report("theme", theme_toggle::attach(&config));
    report("navigation", mobile_nav::attach(&config));
    report("scroll", scroll_tracker::attach(&config));
    report("typewriter", typewriter::attach(&config));
    report("fade-in", reveal::attach(RevealKind::FadeIn, &selectors.fade_in));
    report("skills", reveal::attach(RevealKind::Skill, &selectors.skill_item));
    report("contact", contact_form::attach(&config));
    report("anchors", anchor_scroll::attach(&config));

    tracing::info!("Page behavior attached");
}

/// Log how attaching one component went. A failure only costs that component.
fn report(component: &str, result: FolioResult<()>) {
    match result {
        Ok(()) => tracing::debug!(component, "attached"),
        Err(e) => tracing::warn!(component, "not attached: {}", e),
    }
}

//! Page Chrome
//!
//! Start-up bits that belong to no single section: hiding the loading
//! overlay, installing the banner keyframes and greeting whoever opens the
//! console.

use folio_core::{FolioError, FolioResult, PageConfig, Scheduler};
use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::JsValue;

use crate::dom;
use crate::scheduler::BrowserScheduler;

/// Class that hides the loading overlay
const LOADER_HIDDEN_CLASS: &str = "hidden";

/// Entry and exit animations used by contact form banners
pub const BANNER_KEYFRAMES: &str = "
    @keyframes slideIn {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes slideOut {
        from { opacity: 1; transform: translateY(0); }
        to { opacity: 0; transform: translateY(-20px); }
    }
";

const GREETING: [(&str, &str); 2] = [
    (
        "%c👋 Welcome to my portfolio!",
        "color: #64ffda; font-size: 20px; font-weight: bold;",
    ),
    (
        "%cCurious how it works? This page is driven by Rust compiled to WebAssembly.",
        "color: #0ea5e9; font-size: 14px;",
    ),
];

/// Hide the loader a fixed delay after the window has loaded.
pub fn attach_loader(config: &PageConfig) -> FolioResult<()> {
    let loader = dom::query(&config.selectors.loader)?;
    let delay = config.loader_delay();

    let hide = move || {
        BrowserScheduler.schedule(
            delay,
            Box::new(move || {
                let _ = loader.class_list().add_1(LOADER_HIDDEN_CLASS);
            }),
        );
    };

    // The module can finish instantiating after `load` has already fired
    if document().ready_state() == "complete" {
        hide();
    } else {
        EventListener::once(&window(), "load", move |_| hide()).forget();
    }
    Ok(())
}

pub fn install_keyframes() -> FolioResult<()> {
    let style = document()
        .create_element("style")
        .map_err(|e| FolioError::Dom(dom::js_error(&e)))?;
    style.set_text_content(Some(BANNER_KEYFRAMES));

    let head = document()
        .head()
        .ok_or_else(|| FolioError::MissingElement("head".to_string()))?;
    head.append_child(&style)
        .map_err(|e| FolioError::Dom(dom::js_error(&e)))?;
    Ok(())
}

pub fn greet() {
    for (text, style) in GREETING {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}

//! Reads the page's inline configuration block.

use folio_core::{FolioError, PageConfig, CONFIG_ELEMENT_ID};
use gloo::utils::document;

/// Config from `<script type="application/json" id="folio-config">`, or the
/// defaults when the block is absent. A block that fails to parse is
/// returned as the error alongside the defaults so it can be logged once
/// logging is up.
pub fn load() -> (PageConfig, Option<FolioError>) {
    let Some(text) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return (PageConfig::default(), None);
    };

    match PageConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    }
}

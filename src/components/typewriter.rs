//! Typewriter
//!
//! Hero subtitle that types and deletes the configured phrases forever.

use folio_core::{run_typewriter, FolioResult, PageConfig, Typewriter};
use web_sys::Element;

use crate::dom;
use crate::scheduler::BrowserScheduler;

pub fn attach(config: &PageConfig) -> FolioResult<()> {
    let target: Element = dom::by_id(&config.selectors.typed_text_id)?;
    let typewriter = Typewriter::with_timing(config.phrases.iter().cloned(), config.typewriter)?;

    run_typewriter(
        &BrowserScheduler,
        typewriter,
        config.typewriter.start_delay(),
        move |text| target.set_text_content(Some(text)),
    );
    Ok(())
}

//! Reveal Observers
//!
//! Fade-in content and skill bars animate the first time they scroll into
//! view. The set of elements is captured once at load.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioError, FolioResult, IntersectionSample, RevealKind, RevealTracker};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

pub fn attach(kind: RevealKind, selector: &str) -> FolioResult<()> {
    let targets: Rc<Vec<Element>> = Rc::new(dom::query_all(selector));
    if targets.is_empty() {
        tracing::debug!(?kind, selector, "no elements to reveal");
        return Ok(());
    }

    let options = kind.options();
    let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new(kind)));

    let callback = {
        let targets = targets.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let samples: Vec<IntersectionSample<usize>> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let key = targets.iter().position(|el| *el == target)?;
                        Some(IntersectionSample::new(key, entry.is_intersecting()))
                    })
                    .collect();

                for key in tracker.borrow_mut().observe(samples) {
                    let _ = targets[key].class_list().add_1(options.class);
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| FolioError::Dom(dom::js_error(&e)))?;
    for target in targets.iter() {
        observer.observe(target);
    }

    // Observers live as long as the page
    callback.forget();
    Ok(())
}

//! DOM lookup helpers.
//!
//! Lookups that a component cannot work without return
//! [`FolioError::MissingElement`] so the caller can skip that component.

use folio_core::{FolioError, FolioResult};
use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, NodeList};

/// Element with the given id, cast to `T`.
pub fn by_id<T: JsCast>(id: &str) -> FolioResult<T> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| FolioError::MissingElement(format!("#{}", id)))
}

/// First element in the document matching `selector`.
pub fn query(selector: &str) -> FolioResult<Element> {
    document()
        .query_selector(selector)
        .map_err(|e| FolioError::Dom(js_error(&e)))?
        .ok_or_else(|| FolioError::MissingElement(selector.to_string()))
}

/// First element under `parent` matching `selector`, cast to `T`.
pub fn query_in<T: JsCast>(parent: &Element, selector: &str) -> FolioResult<T> {
    parent
        .query_selector(selector)
        .map_err(|e| FolioError::Dom(js_error(&e)))?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| FolioError::MissingElement(selector.to_string()))
}

/// Every element in the document matching `selector`, in document order.
/// An invalid selector yields nothing.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    document()
        .query_selector_all(selector)
        .map(|list| collect(&list))
        .unwrap_or_default()
}

/// Every element under `parent` matching `selector`.
pub fn query_all_in<T: JsCast>(parent: &Element, selector: &str) -> Vec<T> {
    parent
        .query_selector_all(selector)
        .map(|list| collect(&list))
        .unwrap_or_default()
}

fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Best-effort text for a thrown JS value.
pub fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

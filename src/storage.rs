//! `localStorage` behind the core [`KeyValueStore`] trait.

use folio_core::{FolioError, FolioResult, KeyValueStore};
use gloo::utils::window;
use web_sys::Storage;

use crate::dom::js_error;

/// Local storage, looked up on each call. Storage that is missing or throws
/// (private browsing, disabled cookies) surfaces as [`FolioError::Storage`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> FolioResult<Storage> {
        window()
            .local_storage()
            .map_err(|e| FolioError::Storage(js_error(&e)))?
            .ok_or_else(|| FolioError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| FolioError::Storage(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(js_error(&e)))
    }
}

use portfolio_core::{KeyValueStore, MemoryStorage, StorageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `window.localStorage`.
pub struct LocalStorage {
    inner: web::Storage,
}

impl LocalStorage {
    /// `None` when the browser refuses access (privacy mode, sandboxing).
    pub fn open(window: &web::Window) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(inner)) => Some(Self { inner }),
            Ok(None) => None,
            Err(e) => {
                log::debug!("[storage] localStorage blocked: {:?}", e);
                None
            }
        }
    }
}

fn backend_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", e))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| {
            match e.dyn_ref::<web::DomException>() {
                Some(ex) if ex.name() == "QuotaExceededError" => {
                    StorageError::QuotaExceeded(key.to_string())
                }
                _ => backend_error(e),
            }
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(backend_error)
    }
}

/// Persistent storage when available, otherwise an in-memory stand-in so the
/// session still works.
pub fn open(window: &web::Window) -> Box<dyn KeyValueStore> {
    match LocalStorage::open(window) {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("[storage] localStorage unavailable; settings will not persist");
            Box::new(MemoryStorage::new())
        }
    }
}

use crate::shared::errors::{AppError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// Durable client-side key/value storage.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Read the dark-mode flag stored as `"true"` / `"false"`.
///
/// `Ok(None)` means no choice was ever persisted. Any other stored value is
/// reported as [`AppError::InvalidPreference`].
pub fn load_dark_mode(store: &dyn PreferenceStore, key: &str) -> Result<Option<bool>> {
    match store.get_item(key)?.as_deref() {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(AppError::InvalidPreference {
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}

pub fn save_dark_mode(store: &dyn PreferenceStore, key: &str, dark_mode: bool) -> Result<()> {
    store.set_item(key, if dark_mode { "true" } else { "false" })
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::EnvironmentError("no window available".to_string()))?;
        window
            .local_storage()?
            .ok_or_else(|| AppError::StorageError("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Ok(Self::storage()?.set_item(key, value)?)
    }
}

/// In-process storage for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_preference_is_none() {
        let store = MemoryStore::default();
        assert_eq!(load_dark_mode(&store, "darkMode").unwrap(), None);
    }

    #[test]
    fn test_preference_uses_literal_strings() {
        let store = MemoryStore::default();

        save_dark_mode(&store, "darkMode", true).unwrap();
        assert_eq!(store.get_item("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(load_dark_mode(&store, "darkMode").unwrap(), Some(true));

        save_dark_mode(&store, "darkMode", false).unwrap();
        assert_eq!(store.get_item("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(load_dark_mode(&store, "darkMode").unwrap(), Some(false));
    }

    #[test]
    fn test_garbage_preference_is_invalid() {
        let store = MemoryStore::with_item("darkMode", "yes");

        let result = load_dark_mode(&store, "darkMode");

        assert!(matches!(result, Err(AppError::InvalidPreference { .. })));
    }
}

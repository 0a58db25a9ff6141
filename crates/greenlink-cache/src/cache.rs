//! Typed cache over a storage backend.

use crate::{CacheError, KvBackend};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<B> {
    backend: B,
}

impl<B: KvBackend> Cache<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and
    /// [`CacheError::SerializeError`] if the stored text does not parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("greenlink-cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, overwriting any previous value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("greenlink-cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Get the stored value as text, without parsing it.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self.backend.get(key)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| CacheError::InvalidText(key.to_string())),
            None => Ok(None),
        }
    }

    /// Store text as-is.
    pub fn set_raw(&self, key: &str, text: &str) -> Result<(), CacheError> {
        self.backend.set(key, text.as_bytes())
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.backend.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        quantity: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let cache = Cache::new(MemoryBackend::new());
        let entries = vec![Entry {
            name: "Mug".to_string(),
            quantity: 2,
        }];

        cache.set("slot", &entries).unwrap();
        let loaded: Option<Vec<Entry>> = cache.get("slot").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::new(MemoryBackend::new());
        let loaded: Option<Vec<Entry>> = cache.get("slot").unwrap();
        assert!(loaded.is_none());
        assert!(cache.get_raw("slot").unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_is_serialize_error() {
        let cache = Cache::new(MemoryBackend::new());
        cache.set_raw("slot", r#"{"not":"a list"}"#).unwrap();

        let result: Result<Option<Vec<Entry>>, _> = cache.get("slot");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
        assert_eq!(
            cache.get_raw("slot").unwrap().as_deref(),
            Some(r#"{"not":"a list"}"#)
        );
    }

    #[test]
    fn test_invalid_utf8_raw() {
        let cache = Cache::new(MemoryBackend::new());
        cache.backend().set("slot", &[0xff, 0xfe]).unwrap();
        assert!(matches!(
            cache.get_raw("slot"),
            Err(CacheError::InvalidText(_))
        ));
    }

    #[test]
    fn test_delete_and_keys() {
        let cache = Cache::new(MemoryBackend::new());
        cache.set("a", &1).unwrap();
        cache.set("b", &2).unwrap();
        assert_eq!(cache.keys().unwrap(), vec!["a", "b"]);

        cache.delete("a").unwrap();
        assert!(!cache.exists("a").unwrap());
        assert!(cache.exists("b").unwrap());
    }
}

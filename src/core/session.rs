//! Session-scoped key/value storage and the shared file reference
//!
//! Every view of the app reads the selected file name from the same
//! [`FileReferenceStore`]. The store lives for one app session and is
//! never written to disk.

use std::collections::HashMap;

/// Key under which the selected file name is stored
pub const FILENAME_KEY: &str = "clausewise:filename";

/// Errors from a session storage backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend refuses all access
    #[allow(dead_code)]
    #[error("session storage is unavailable")]
    Unavailable,
}

/// Key/value storage scoped to a single session
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str);
}

/// In-memory backend living as long as the session
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Backend for hosts where session storage is disabled
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&mut self, _key: &str) {}
}

/// The name of the file the user picked, shared across views
///
/// Storage failures are logged and swallowed so rendering never breaks; a
/// failed write leaves the reference absent.
pub struct FileReferenceStore {
    backend: Box<dyn SessionStore>,
}

impl Default for FileReferenceStore {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

impl FileReferenceStore {
    /// Wrap a storage backend
    pub fn new(backend: Box<dyn SessionStore>) -> Self {
        Self { backend }
    }

    /// Record `name` as the selected file, replacing any previous one
    pub fn set_file_reference(&mut self, name: &str) {
        match self.backend.set(FILENAME_KEY, name) {
            Ok(()) => tracing::info!("Selected file: {}", name),
            Err(e) => {
                tracing::warn!("Could not remember selected file {:?}: {}", name, e);
                self.backend.remove(FILENAME_KEY);
            }
        }
    }

    /// The selected file, or `None` if nothing was picked this session
    pub fn get_file_reference(&self) -> Option<String> {
        self.backend.get(FILENAME_KEY)
    }

    /// Forget the selected file
    pub fn clear_file_reference(&mut self) {
        self.backend.remove(FILENAME_KEY);
        tracing::debug!("Cleared selected file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_in_fresh_session() {
        let store = FileReferenceStore::default();
        assert_eq!(store.get_file_reference(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = FileReferenceStore::default();
        store.set_file_reference("contract.pdf");
        assert_eq!(store.get_file_reference().as_deref(), Some("contract.pdf"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = FileReferenceStore::default();
        store.set_file_reference("a.pdf");
        store.set_file_reference("b.pdf");
        assert_eq!(store.get_file_reference().as_deref(), Some("b.pdf"));
    }

    #[test]
    fn test_empty_name_is_present() {
        let mut store = FileReferenceStore::default();
        store.set_file_reference("");
        assert_eq!(store.get_file_reference(), Some(String::new()));
    }

    #[test]
    fn test_clear_returns_to_absent() {
        let mut store = FileReferenceStore::default();
        store.set_file_reference("nda.docx");
        store.clear_file_reference();
        assert_eq!(store.get_file_reference(), None);

        // clearing twice is harmless
        store.clear_file_reference();
        assert_eq!(store.get_file_reference(), None);
    }

    #[test]
    fn test_unavailable_backend_degrades_to_absent() {
        let mut store = FileReferenceStore::new(Box::new(UnavailableStore));
        store.set_file_reference("contract.pdf");
        assert_eq!(store.get_file_reference(), None);
    }

    #[test]
    fn test_uses_session_key() {
        let mut backend = MemoryStore::new();
        backend.set(FILENAME_KEY, "lease.pdf").unwrap();
        let store = FileReferenceStore::new(Box::new(backend));
        assert_eq!(store.get_file_reference().as_deref(), Some("lease.pdf"));
    }

    #[test]
    fn test_memory_store_keys_are_independent() {
        let mut backend = MemoryStore::new();
        backend.set("one", "1").unwrap();
        backend.set("two", "2").unwrap();
        backend.remove("one");
        assert_eq!(backend.get("one"), None);
        assert_eq!(backend.get("two").as_deref(), Some("2"));
    }
}

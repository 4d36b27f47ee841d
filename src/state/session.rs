//! Per-browser session identifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend keys conversation history by the `session_id` sent with every
//! streaming request. The identifier is created lazily on first use and then
//! read back unchanged from persistent storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

const SEGMENT_LEN: usize = 13;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`. Unavailable storage reads as empty and ignores writes.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Return the stored session id under `key`, creating and storing one if absent.
pub fn get_or_create_session_id(store: &impl KeyValueStore, key: &str) -> String {
    if let Some(existing) = store.get(key).filter(|v| !v.is_empty()) {
        return existing;
    }
    let id = generate_session_id();
    store.set(key, &id);
    id
}

/// Two independent random base-36 segments, concatenated.
pub fn generate_session_id() -> String {
    let mut id = random_segment();
    id.push_str(&random_segment());
    id
}

fn random_segment() -> String {
    let mut n = uuid::Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(SEGMENT_LEN);
    for _ in 0..SEGMENT_LEN {
        out.push(char::from(ALPHABET[usize::try_from(n % 36).unwrap_or_default()]));
        n /= 36;
    }
    out
}

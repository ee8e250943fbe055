use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::DevotrackError;

use super::kv_repo::KeyValueStore;

/// In-process key-value store. Reads and writes can be switched to fail,
/// which lets callers exercise the best-effort paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw stored value, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Store a raw value, bypassing failure injection.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DevotrackError> {
        if self.fail_reads.get() {
            return Err(DevotrackError::storage(format!("read of '{key}' failed")));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), DevotrackError> {
        if self.fail_writes.get() {
            return Err(DevotrackError::storage(format!("write of '{key}' failed")));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), DevotrackError> {
        if self.fail_writes.get() {
            return Err(DevotrackError::storage("remove failed"));
        }
        let mut items = self.items.borrow_mut();
        for key in keys {
            items.remove(*key);
        }
        Ok(())
    }
}

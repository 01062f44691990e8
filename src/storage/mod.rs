//! Key/value persistence for the workout list.
//!
//! The whole list lives under one key and is overwritten on every save,
//! the same layout a browser keeps in `localStorage`.

pub mod workouts;

use crate::errors::AppResult;
use std::collections::HashMap;

pub use workouts::{WORKOUTS_KEY, clear, load, save};

/// Minimal string store: get / set / remove by key.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

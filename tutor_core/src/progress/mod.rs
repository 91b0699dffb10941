//! Progress storage - durable key-value persistence for session state.
//!
//! Writes are fire-and-forget and reads fall back to a fresh start when
//! nothing (or something unreadable) is saved. Nothing here is ever retried
//! or surfaced to the child.

mod file;

pub use file::*;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Well-known storage keys shared by the activities.
pub mod keys {
    /// Node id of the scene the story was last showing.
    pub const STORY_NODE: &str = "story.current_node";
    /// Append-only log of story choices taken.
    pub const STORY_HISTORY: &str = "story.history";
    /// Questions the child has answered correctly.
    pub const TUTOR_HISTORY: &str = "tutor.history";
    /// Completed trace drawings.
    pub const TRACE_HISTORY: &str = "trace.history";
}

/// Values a progress store can hold: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Text(String),
    List(Vec<String>),
}

impl StoreValue {
    pub fn text(value: impl Into<String>) -> Self {
        StoreValue::Text(value.into())
    }

    pub fn list(values: Vec<String>) -> Self {
        StoreValue::List(values)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(text) => Some(text),
            StoreValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            StoreValue::List(list) => Some(list),
            StoreValue::Text(_) => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<String>> {
        match self {
            StoreValue::List(list) => Some(list),
            StoreValue::Text(_) => None,
        }
    }
}

/// Durable key-value persistence for progress.
///
/// Implementations handle their own failures; callers never observe or retry
/// a failed write.
pub trait ProgressStore {
    fn set(&mut self, key: &str, value: StoreValue);
    fn get(&self, key: &str) -> Option<StoreValue>;
}

/// In-memory store. Progress lasts for the process lifetime only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, StoreValue>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn set(&mut self, key: &str, value: StoreValue) {
        self.entries.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<StoreValue> {
        self.entries.get(key).cloned()
    }
}

/// Shared handle to a single underlying store.
///
/// The story, quiz, and trace activities all persist through one store; this
/// hands each of them a cheap clone of the same backing storage. Engine state
/// lives on the interface thread, so the handle is `Rc`-based.
#[derive(Debug, Default)]
pub struct SharedStore<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: ProgressStore> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }
}

impl<S: ProgressStore> ProgressStore for SharedStore<S> {
    fn set(&mut self, key: &str, value: StoreValue) {
        self.inner.borrow_mut().set(key, value);
    }

    fn get(&self, key: &str) -> Option<StoreValue> {
        self.inner.borrow().get(key)
    }
}

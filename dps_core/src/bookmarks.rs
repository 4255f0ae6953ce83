//! Named configuration bookmarks
//!
//! A small keyed-record store for user-saved calculation setups:
//! fixed capacity, newest first, adding under an existing name
//! overwrites it. Persisted as a single JSON file.

use crate::types::SkillSelection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Entries kept in the store
pub const DEFAULT_BOOKMARK_CAPACITY: usize = 10;

/// Persistence failure in the bookmark store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Bookmark I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Bookmark format error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// One saved calculation setup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub name: String,
    pub weapon: String,
    pub monster: String,
    pub part: String,
    pub combo: String,
    #[serde(default)]
    pub skills: SkillSelection,
}

/// Fixed-capacity bookmark store backed by a JSON file
pub struct BookmarkStore {
    path: PathBuf,
    capacity: usize,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BookmarkStore {
            path: path.into(),
            capacity: DEFAULT_BOOKMARK_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Load all bookmarks, newest first. A missing file is an empty
    /// store, not an error.
    pub fn load(&self) -> Result<Vec<Bookmark>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Add a bookmark at the front, overwriting any entry with the
    /// same name and evicting beyond capacity.
    pub fn add(&self, entry: Bookmark) -> Result<(), StoreError> {
        let mut bookmarks = self.load()?;
        bookmarks.retain(|b| b.name != entry.name);
        bookmarks.insert(0, entry);
        bookmarks.truncate(self.capacity);
        self.save(&bookmarks)
    }

    /// Remove the bookmark with the given name, if present.
    pub fn remove(&self, name: &str) -> Result<(), StoreError> {
        let mut bookmarks = self.load()?;
        bookmarks.retain(|b| b.name != name);
        self.save(&bookmarks)
    }

    /// Drop every bookmark.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])
    }

    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(bookmarks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Convenience: store rooted at `<dir>/bookmarks.json`
pub fn store_in(dir: &Path) -> BookmarkStore {
    BookmarkStore::new(dir.join("bookmarks.json"))
}

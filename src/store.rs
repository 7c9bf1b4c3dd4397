//! Single-key draft persistence: a JSON file standing in for browser storage.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key for the one in-progress post.
pub const DRAFT_KEY: &str = "writer/draft";

/// The in-progress post. Replaced wholesale on every write; no merging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub body: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self { body: "# ".to_string() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("draft storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("draft serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage port. Swappable so tests can run against an in-memory double.
pub trait DraftStore {
    /// Read the draft under `key`, or `default` if nothing is stored.
    /// The default is NOT persisted — the key stays absent until `write`.
    fn read(&self, key: &str, default: Draft) -> Draft;

    /// Replace whatever is under `key` with `draft`.
    fn write(&mut self, key: &str, draft: &Draft) -> Result<(), StoreError>;
}

/// One JSON file per key under a root directory. Key slashes become
/// subdirectories, so `writer/draft` lands at `<root>/writer/draft.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Platform data directory, e.g. `~/.local/share/quill` on Linux.
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quill")
    }

    fn path(&self, key: &str) -> PathBuf {
        let mut path = self.root.join(key);
        path.set_extension("json");
        path
    }
}

impl DraftStore for FileStore {
    fn read(&self, key: &str, default: Draft) -> Draft {
        let path = self.path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return default,
        };
        match serde_json::from_str(&contents) {
            Ok(draft) => draft,
            Err(err) => {
                // Corrupt content is left on disk until the next write.
                warn!(path = %path.display(), error = %err, "stored draft unreadable, starting from default");
                default
            }
        }
    }

    fn write(&mut self, key: &str, draft: &Draft) -> Result<(), StoreError> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(draft)?;
        fs::write(&path, json)?;
        Ok(())
    }
}

/// In-memory double for tests. Mirrors the file store's contract, including
/// the serialized-JSON representation.
#[cfg(test)]
pub struct MemoryStore {
    pub entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self { entries: std::collections::HashMap::new() }
    }
}

#[cfg(test)]
impl DraftStore for MemoryStore {
    fn read(&self, key: &str, default: Draft) -> Draft {
        match self.entries.get(key) {
            Some(json) => serde_json::from_str(json).unwrap_or(default),
            None => default,
        }
    }

    fn write(&mut self, key: &str, draft: &Draft) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), serde_json::to_string(draft)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &std::path::Path) -> FileStore {
        FileStore::new(dir.to_path_buf())
    }

    #[test]
    fn read_after_write_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let draft = Draft { body: "# Hello\n\nworld".to_string() };
        store.write(DRAFT_KEY, &draft).unwrap();
        assert_eq!(store.read(DRAFT_KEY, Draft::default()), draft);
    }

    #[test]
    fn missing_key_returns_default_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.read(DRAFT_KEY, Draft::default()), Draft::default());
        // Lazy default: the raw lookup still reports absent.
        assert!(!dir.path().join("writer/draft.json").exists());
    }

    #[test]
    fn write_overwrites_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.write(DRAFT_KEY, &Draft { body: "first".into() }).unwrap();
        store.write(DRAFT_KEY, &Draft { body: "second".into() }).unwrap();
        assert_eq!(store.read(DRAFT_KEY, Draft::default()).body, "second");
    }

    #[test]
    fn corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("writer");
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("draft.json"), "{not json").unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.read(DRAFT_KEY, Draft::default()), Draft::default());
    }

    #[test]
    fn default_draft_body() {
        assert_eq!(Draft::default().body, "# ");
    }

    #[test]
    fn serialized_form_is_plain_json() {
        let json = serde_json::to_string(&Draft { body: "# ".into() }).unwrap();
        assert_eq!(json, r##"{"body":"# "}"##);
    }
}

//! Durable local log of completed sessions, newest first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::HistoryEntry;

/// Append-only history of completed sessions, persisted as one JSON file
/// that is rewritten wholesale on every append.
///
/// Durability is best effort: a missing or corrupt file loads as empty
/// history, and a failed write keeps the in-memory list intact. Both are
/// logged, never propagated as session failures.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store at `path`, deserializing the persisted list if one
    /// is there.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    log::warn!("ignoring corrupt history file {}: {err}", path.display());
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                log::warn!("could not read history file {}: {err}", path.display());
                Vec::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Prepend an entry and persist the whole list.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.persist();
    }

    /// Drop all entries and remove the persisted file.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                log::warn!("could not remove history file {}: {err}", self.path.display());
            }
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::error!("could not serialize history: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            log::error!(
                "could not persist history to {}: {err}",
                self.path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("skillquiz-history-{}.json", uuid::Uuid::new_v4()))
    }

    fn entry(name: &str, score: usize) -> HistoryEntry {
        HistoryEntry::new(
            name.to_string(),
            "Cybersecurity".to_string(),
            None,
            score,
            20,
            "Intermediate",
        )
    }

    #[test]
    fn test_append_then_reload_round_trips() {
        let path = temp_path();
        let mut store = HistoryStore::load(&path);
        store.append(entry("Ada", 13));
        store.append(entry("Grace", 18));

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.len(), 2);
        // newest first
        assert_eq!(reloaded.entries()[0].user_name, "Grace");
        assert_eq!(reloaded.entries()[1], store.entries()[1]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_clear_removes_the_file() {
        let path = temp_path();
        let mut store = HistoryStore::load(&path);
        store.append(entry("Ada", 13));
        assert!(path.exists());

        store.clear();
        assert!(store.is_empty());
        assert!(!path.exists());
        assert!(HistoryStore::load(&path).is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let path = temp_path();
        std::fs::write(&path, "{not json").unwrap();
        let store = HistoryStore::load(&path);
        assert!(store.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_failure_keeps_in_memory_list() {
        let path = std::env::temp_dir()
            .join(format!("skillquiz-missing-{}", uuid::Uuid::new_v4()))
            .join("history.json");
        let mut store = HistoryStore::load(&path);
        store.append(entry("Ada", 13));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].user_name, "Ada");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! File-backed storage.
//!
//! All keys live in one JSON object document. Every mutation re-reads the
//! document, applies the change and writes a sibling temp file that is then
//! renamed over the original, so readers see either the old or the new
//! document, never a torn one.

use super::Storage;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

type Document = BTreeMap<String, String>;

/// Storage persisted as a JSON document on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Creates a storage backed by the document at `path`.
    ///
    /// Nothing is touched on disk until the first write; a missing document
    /// reads as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let file = fs::File::open(&self.path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|err| {
            Error::Storage(format!(
                "unreadable storage document {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    fn write_document(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let file = fs::File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, document)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Document)) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::Storage("storage lock poisoned".to_string()))?;

        // A corrupted document is replaced rather than blocking every write.
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(Error::Storage(reason)) => {
                tracing::warn!(%reason, "discarding corrupted storage document");
                Document::new()
            }
            Err(other) => return Err(other),
        };
        apply(&mut document);
        self.write_document(&document)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_document()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|document| {
            document.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|document| {
            document.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_document_reads_as_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));

        assert_eq!(storage.get_item("app-language").unwrap(), None);
        assert!(!storage.path().exists(), "reads must not create the file");
    }

    #[test]
    fn set_item_persists_across_instances() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("storage.json");

        FileStorage::new(&path)
            .set_item("favoriteTeams", "[\"Ferencváros\"]")
            .unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get_item("favoriteTeams").unwrap().as_deref(),
            Some("[\"Ferencváros\"]")
        );
    }

    #[test]
    fn set_item_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("nested").join("deeply").join("storage.json");

        FileStorage::new(&path).set_item("app-language", "\"en\"").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn writes_to_one_key_keep_the_other() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));

        storage.set_item("app-language", "\"en\"").unwrap();
        storage.set_item("favoriteTeams", "[]").unwrap();
        storage.remove_item("favoriteTeams").unwrap();

        assert_eq!(
            storage.get_item("app-language").unwrap().as_deref(),
            Some("\"en\"")
        );
        assert_eq!(storage.get_item("favoriteTeams").unwrap(), None);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));

        storage.set_item("app-language", "\"hu\"").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("storage.json")]);
    }

    #[test]
    fn corrupted_document_is_a_storage_error_on_read() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not valid json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item("app-language"),
            Err(Error::Storage(_))
        ));
    }

    #[test]
    fn corrupted_document_is_replaced_on_write() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not valid json").unwrap();

        let storage = FileStorage::new(&path);
        storage.set_item("app-language", "\"en\"").unwrap();

        assert_eq!(
            storage.get_item("app-language").unwrap().as_deref(),
            Some("\"en\"")
        );
    }
}

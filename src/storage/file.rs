//! JSON-file-backed record store
//!
//! Loads the full record map on open and rewrites the file after each
//! committed insert, while still holding the write lock. A store file
//! that cannot be read or written surfaces as a store error; the core
//! never retries.

use super::{PutOutcome, Record, RecordStore, StoreError};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    records: HashMap<String, Record>,
}

/// Durable store persisting records as pretty-printed JSON
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: RwLock<HashMap<String, Record>>,
}

impl FileStore {
    /// Open a store file, loading existing records if the file exists.
    ///
    /// A missing file means an empty store; a present but unreadable or
    /// malformed file is an error rather than silent data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&data)?;
            info!(
                "Loaded {} records from {}",
                file.records.len(),
                path.display()
            );
            file.records
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn flush(&self, records: &HashMap<String, Record>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = StoreFile {
            records: records.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn get(&self, fingerprint: &str) -> Result<Option<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(records.get(fingerprint).cloned())
    }

    fn put_if_absent(&self, record: Record) -> Result<PutOutcome, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if let Some(existing) = records.get(&record.fingerprint) {
            return Ok(PutOutcome::AlreadyExists(existing.clone()));
        }
        let fp = record.fingerprint.clone();
        records.insert(fp.clone(), record);
        // Flush under the lock so a committed record is on disk before
        // any later call can observe it. A failed flush rolls the
        // insert back: a record is either durable or absent.
        if let Err(e) = self.flush(&records) {
            records.remove(&fp);
            return Err(e);
        }
        Ok(PutOutcome::Committed)
    }

    fn count_by_classification(&self, mutant: bool) -> Result<u64, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(records.values().filter(|r| r.mutant == mutant).count() as u64)
    }
}

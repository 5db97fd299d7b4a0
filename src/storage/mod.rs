//! Record storage — the persistence capability behind the registry
//!
//! The registry only needs three operations: point lookup by
//! fingerprint, atomic insert-if-absent, and a per-class count. Any
//! store honoring the one-record-per-fingerprint guarantee fits.

pub mod file;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

pub use file::FileStore;

/// A durable classification result for one distinct grid
///
/// Created once, never mutated or deleted. The original row text is
/// kept alongside the hash for inspection and replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub fingerprint: String,
    pub mutant: bool,
    pub sequence: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(fingerprint: impl Into<String>, mutant: bool, sequence: Vec<String>) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            mutant,
            sequence,
            created_at: Utc::now(),
        }
    }
}

/// Outcome of an insert-if-absent attempt
#[derive(Debug, Clone)]
pub enum PutOutcome {
    /// The record was written; this caller won the race.
    Committed,
    /// A record with the same fingerprint already exists; the insert
    /// was dropped and the winning record is returned.
    AlreadyExists(Record),
}

/// Store-side failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The key-value capability the registry depends on
///
/// Implementations must guarantee that at most one record per
/// fingerprint ever commits, no matter how calls interleave, and that
/// a record is observed either fully or not at all.
pub trait RecordStore: Send + Sync {
    /// Look up the record for a fingerprint, if any
    fn get(&self, fingerprint: &str) -> Result<Option<Record>, StoreError>;

    /// Insert the record unless its fingerprint is already present
    fn put_if_absent(&self, record: Record) -> Result<PutOutcome, StoreError>;

    /// Number of records with the given classification
    fn count_by_classification(&self, mutant: bool) -> Result<u64, StoreError>;
}

/// In-memory store, the default for tests and embedding
///
/// `put_if_absent` holds the write lock across the existence check and
/// the insert, which is what makes it atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
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
        records.insert(record.fingerprint.clone(), record);
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

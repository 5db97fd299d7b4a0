//! Registry — deduplicated classification and aggregate statistics
//!
//! Each distinct grid is scanned exactly once; its classification is
//! persisted under the grid's content fingerprint and replayed on every
//! later submission of the same grid. Statistics are derived from the
//! stored records at read time, never cached.

mod fingerprint;

use crate::detector::{self, Grid, GridError};
use crate::storage::{PutOutcome, Record, RecordStore, StoreError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fingerprint::fingerprint;

/// Failures surfaced by `classify` and `stats`
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Aggregate view over all stored records
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mutant_count: u64,
    pub human_count: u64,
    pub ratio: f64,
}

impl Stats {
    /// Build stats from the two class counts.
    ///
    /// Ratio is mutant/human. With no records at all it is 0.0; with
    /// mutants but no humans the division has no reference value, so
    /// the sentinel `f64::INFINITY` is returned rather than a panic.
    pub fn from_counts(mutant_count: u64, human_count: u64) -> Self {
        let ratio = if human_count > 0 {
            mutant_count as f64 / human_count as f64
        } else if mutant_count == 0 {
            0.0
        } else {
            f64::INFINITY
        };
        Self {
            mutant_count,
            human_count,
            ratio,
        }
    }
}

/// The classification service: validation, dedup, persistence
pub struct Registry<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for embedding callers that share it
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Classify a candidate grid, reusing any stored result.
    ///
    /// Validation failures propagate untouched and leave no state
    /// behind. A lost insert race is resolved by adopting the winning
    /// record; the caller never sees it.
    pub fn classify<R: AsRef<str>>(&self, rows: &[R]) -> Result<bool, AnalysisError> {
        let grid = Grid::parse(rows)?;
        let fp = fingerprint(&grid);

        if let Some(existing) = self.store.get(&fp)? {
            debug!("Fingerprint {} already classified", &fp[..8]);
            return Ok(existing.mutant);
        }

        let mutant = detector::is_mutant(&grid);
        let sequence: Vec<String> = rows.iter().map(|r| r.as_ref().to_string()).collect();
        match self.store.put_if_absent(Record::new(&fp, mutant, sequence))? {
            PutOutcome::Committed => {
                info!(
                    "Recorded {} grid under fingerprint {}",
                    if mutant { "mutant" } else { "human" },
                    &fp[..8]
                );
                Ok(mutant)
            }
            PutOutcome::AlreadyExists(winner) => {
                debug!("Lost insert race on fingerprint {}", &fp[..8]);
                Ok(winner.mutant)
            }
        }
    }

    /// Current counts and ratio, recomputed from the store
    pub fn stats(&self) -> Result<Stats, AnalysisError> {
        let mutant_count = self.store.count_by_classification(true)?;
        let human_count = self.store.count_by_classification(false)?;
        Ok(Stats::from_counts(mutant_count, human_count))
    }
}

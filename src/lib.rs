//! Mutant Core — DNA grid run detection with deduplicated records
//!
//! A grid over {A,T,C,G} is mutant when it contains at least two
//! straight runs of four identical symbols. The detector is a pure
//! scan; the registry fingerprints each grid, classifies it once, and
//! aggregates classification counts from the stored records.

pub mod detector;
pub mod registry;
pub mod storage;

pub use detector::{is_mutant, Grid, GridError};
pub use registry::{AnalysisError, Registry, Stats};
pub use storage::{FileStore, MemoryStore, Record, RecordStore};

//! Detector — pure mutant classification over validated DNA grids
//!
//! A grid is mutant when it holds at least two straight runs of four
//! identical symbols, in any of the four scan directions. Validation
//! and scanning are side-effect free and keep no history.

mod grid;
mod scan;

pub use grid::{Grid, GridError, ALPHABET, MIN_SIDE};
pub use scan::{is_mutant, is_mutant_scanning, Direction, RUN_LEN};

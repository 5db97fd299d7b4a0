//! Grid fingerprinting — content identity for deduplication
//!
//! SHA-256 over the rows concatenated in row order, hex-encoded. Two
//! grids share a fingerprint only if they share every row in the same
//! order (up to digest collisions, treated as negligible).

use crate::detector::Grid;
use sha2::{Digest, Sha256};

/// Compute the 64-character hex fingerprint of a validated grid
pub fn fingerprint(grid: &Grid) -> String {
    let mut hasher = Sha256::new();
    for row in grid.rows() {
        hasher.update(row);
    }
    hex::encode(hasher.finalize())
}

//! Grid — validated N×N DNA matrix
//!
//! A `Grid` can only be built through `parse`, so every instance is
//! square, at least 4×4, and drawn entirely from the {A,T,C,G} alphabet.
//! Detection code relies on that and never re-checks bounds.

use thiserror::Error;

/// Minimum side length for a grid to be analyzable (a run needs 4 cells).
pub const MIN_SIDE: usize = 4;

/// The nucleobase alphabet every cell must belong to.
pub const ALPHABET: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// Validation failures for a candidate grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,

    #[error("grid side {side} is below the minimum of {MIN_SIDE}")]
    TooSmall { side: usize },

    #[error("row {row} has length {len}, expected {side} (grid must be square)")]
    NotSquare { row: usize, len: usize, side: usize },

    #[error("illegal symbol '{}' at row {row}, column {col} (alphabet is A, T, C, G)", .symbol.escape_ascii())]
    IllegalSymbol { row: usize, col: usize, symbol: u8 },
}

/// A validated square DNA matrix
///
/// Rows are kept as raw bytes for O(1) cell access during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
    side: usize,
}

impl Grid {
    /// Validate a candidate row sequence and build a `Grid`.
    ///
    /// Fails when the sequence is empty, smaller than 4×4, not square,
    /// or contains a symbol outside {A,T,C,G}. Validation runs before
    /// anything else touches the input.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let side = rows.len();
        if side < MIN_SIDE {
            return Err(GridError::TooSmall { side });
        }

        let mut parsed = Vec::with_capacity(side);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != side {
                return Err(GridError::NotSquare {
                    row: i,
                    len: row.len(),
                    side,
                });
            }
            for (j, &b) in row.as_bytes().iter().enumerate() {
                if !ALPHABET.contains(&b) {
                    return Err(GridError::IllegalSymbol { row: i, col: j, symbol: b });
                }
            }
            parsed.push(row.as_bytes().to_vec());
        }

        Ok(Grid { rows: parsed, side })
    }

    /// Side length N of the N×N grid
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell at (row, col). Callers stay within `0..side` by construction.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// The rows as byte slices, in original order
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_grid() {
        let grid = Grid::parse(&["ATGC", "CAGT", "TTAT", "AGAC"]).unwrap();
        assert_eq!(grid.side(), 4);
        assert_eq!(grid.at(0, 0), b'A');
        assert_eq!(grid.at(3, 3), b'C');
    }

    #[test]
    fn test_empty_grid_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::parse(&rows), Err(GridError::Empty));
    }

    #[test]
    fn test_undersized_grid_rejected() {
        for side in 1..MIN_SIDE {
            let rows: Vec<String> = (0..side).map(|_| "A".repeat(side)).collect();
            assert_eq!(Grid::parse(&rows), Err(GridError::TooSmall { side }));
        }
    }

    #[test]
    fn test_non_square_grid_rejected() {
        let err = Grid::parse(&["ATGC", "CAGTA", "TTAT", "AGAC"]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                row: 1,
                len: 5,
                side: 4
            }
        );
    }

    #[test]
    fn test_illegal_symbol_rejected() {
        let err = Grid::parse(&["ATGC", "CAXT", "TTAT", "AGAC"]).unwrap_err();
        assert_eq!(
            err,
            GridError::IllegalSymbol {
                row: 1,
                col: 2,
                symbol: b'X'
            }
        );
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_non_ascii_byte_reported_escaped() {
        // "é" is the two bytes 0xC3 0xA9, so the row is 4 bytes long
        // and passes the square check; the error must name the raw
        // byte, not a half-decoded character.
        let err = Grid::parse(&["ATé", "CAGT", "TTAT", "AGAC"]).unwrap_err();
        assert_eq!(
            err,
            GridError::IllegalSymbol {
                row: 0,
                col: 2,
                symbol: 0xC3
            }
        );
        assert!(err.to_string().contains("\\xc3"));
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!(matches!(
            Grid::parse(&["atgc", "cagt", "ttat", "agac"]),
            Err(GridError::IllegalSymbol { row: 0, col: 0, .. })
        ));
    }
}

//! Run scanning — the mutant decision over a validated grid
//!
//! Four fixed scan directions, one running counter of qualifying runs
//! (4 identical consecutive symbols). Two runs anywhere make the grid
//! mutant; the scan returns as soon as the second run is found.

use super::Grid;

/// Length of a qualifying run
pub const RUN_LEN: usize = 4;

/// Number of runs at which a grid is classified mutant
const MUTANT_THRESHOLD: usize = 2;

/// A straight scanning direction over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    /// All directions, in the canonical scan order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];
}

/// Decide whether the grid is mutant: two or more qualifying runs
/// across all four directions.
///
/// Pure and deterministic; short-circuits on the second run found.
pub fn is_mutant(grid: &Grid) -> bool {
    is_mutant_scanning(grid, &Direction::ALL)
}

/// `is_mutant` with an explicit direction order.
///
/// The boolean result does not depend on the order; only how early the
/// scan stops does. Exposed so that order independence stays testable.
pub fn is_mutant_scanning(grid: &Grid, order: &[Direction]) -> bool {
    let mut found = 0usize;
    for &dir in order {
        found += runs_in_direction(grid, dir, MUTANT_THRESHOLD - found);
        if found >= MUTANT_THRESHOLD {
            return true;
        }
    }
    false
}

/// Count qualifying runs along one direction, stopping once `limit`
/// runs have been seen. `limit == usize::MAX` counts exhaustively.
fn runs_in_direction(grid: &Grid, dir: Direction, limit: usize) -> usize {
    let n = grid.side();
    let mut found = 0usize;

    // Each arm enumerates the run starting cells valid for its direction
    // and samples RUN_LEN cells from there.
    match dir {
        Direction::Horizontal => {
            for i in 0..n {
                for j in 0..=n - RUN_LEN {
                    if uniform(grid, i, j, 0, 1) {
                        found += 1;
                        if found >= limit {
                            return found;
                        }
                    }
                }
            }
        }
        Direction::Vertical => {
            for j in 0..n {
                for i in 0..=n - RUN_LEN {
                    if uniform(grid, i, j, 1, 0) {
                        found += 1;
                        if found >= limit {
                            return found;
                        }
                    }
                }
            }
        }
        Direction::DiagonalDown => {
            for i in 0..=n - RUN_LEN {
                for j in 0..=n - RUN_LEN {
                    if uniform(grid, i, j, 1, 1) {
                        found += 1;
                        if found >= limit {
                            return found;
                        }
                    }
                }
            }
        }
        Direction::DiagonalUp => {
            for i in RUN_LEN - 1..n {
                for j in 0..=n - RUN_LEN {
                    if uniform(grid, i, j, -1, 1) {
                        found += 1;
                        if found >= limit {
                            return found;
                        }
                    }
                }
            }
        }
    }

    found
}

/// True when the RUN_LEN cells from (row, col) along (di, dj) are identical
#[inline]
fn uniform(grid: &Grid, row: usize, col: usize, di: isize, dj: isize) -> bool {
    let first = grid.at(row, col);
    (1..RUN_LEN as isize).all(|k| {
        let r = (row as isize + di * k) as usize;
        let c = (col as isize + dj * k) as usize;
        grid.at(r, c) == first
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::parse(rows).unwrap()
    }

    #[test]
    fn test_reference_mutant_grid() {
        let g = grid(&["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]);
        assert!(is_mutant(&g));
    }

    #[test]
    fn test_reference_non_mutant_grid() {
        let g = grid(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]);
        assert!(!is_mutant(&g));
    }

    #[test]
    fn test_single_run_is_not_mutant() {
        // Exactly one horizontal run, nothing else repeats four times.
        let g = grid(&["AAAA", "CTGC", "GCAT", "TGCA"]);
        assert!(!is_mutant(&g));
    }

    #[test]
    fn test_two_horizontal_runs() {
        let g = grid(&["AAAA", "CTGC", "TTTT", "TGCA"]);
        assert!(is_mutant(&g));
    }

    #[test]
    fn test_vertical_and_diagonal_runs() {
        // Column 0 is all G and nothing else repeats four times.
        let g = grid(&["GATC", "GCAT", "GTCA", "GGCA"]);
        assert!(!is_mutant(&g)); // only the vertical run qualifies

        // Column 0 all G plus the ↘ main diagonal all G.
        let g = grid(&["GATC", "GGCT", "GTGA", "GCAG"]);
        assert!(is_mutant(&g));
    }

    #[test]
    fn test_ascending_diagonal_run() {
        // ↗ diagonal from (3,0): T T T T.
        let g = grid(&["CCCT", "AGTC", "ATGA", "TAGG"]);
        assert!(!is_mutant(&g)); // one ↗ run only

        // Same diagonal plus a horizontal run in the last row.
        let g = grid(&["CCCT", "AGTC", "ATGA", "TTTT"]);
        assert!(is_mutant(&g));
    }

    #[test]
    fn test_overlapping_runs_count_separately() {
        // Five identical symbols in a row hold two overlapping runs.
        let g = grid(&["AAAAA", "CTGCT", "GCATG", "TGCAT", "CATGC"]);
        assert!(is_mutant(&g));
    }

    #[test]
    fn test_minimum_grid_all_same() {
        let g = grid(&["TTTT", "TTTT", "TTTT", "TTTT"]);
        assert!(is_mutant(&g));
    }

    #[test]
    fn test_no_runs_at_all() {
        let g = grid(&["ATGC", "CGTA", "GCAT", "TACG"]);
        assert!(!is_mutant(&g));
    }

    #[test]
    fn test_exhaustive_direction_counts() {
        let g = grid(&["AAAA", "CTGC", "TTTT", "TGCA"]);
        assert_eq!(runs_in_direction(&g, Direction::Horizontal, usize::MAX), 2);
        assert_eq!(runs_in_direction(&g, Direction::Vertical, usize::MAX), 0);
    }

    fn arb_grid(side: usize) -> impl Strategy<Value = Grid> {
        // Biased toward a two-letter alphabet so runs actually occur.
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec![b'A', b'T', b'C', b'G', b'A', b'T']), side),
            side,
        )
        .prop_map(|rows| {
            let rows: Vec<String> = rows
                .into_iter()
                .map(|r| String::from_utf8(r).unwrap())
                .collect();
            Grid::parse(&rows).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_scan_order_never_changes_the_answer(g in arb_grid(6)) {
            use Direction::*;
            let canonical = is_mutant(&g);
            let orders: [[Direction; 4]; 5] = [
                [Vertical, Horizontal, DiagonalUp, DiagonalDown],
                [DiagonalDown, DiagonalUp, Vertical, Horizontal],
                [DiagonalUp, Horizontal, DiagonalDown, Vertical],
                [Horizontal, DiagonalDown, Vertical, DiagonalUp],
                [DiagonalUp, DiagonalDown, Horizontal, Vertical],
            ];
            for order in orders {
                prop_assert_eq!(is_mutant_scanning(&g, &order), canonical);
            }
        }

        #[test]
        fn prop_short_circuit_agrees_with_exhaustive_count(g in arb_grid(8)) {
            let total: usize = Direction::ALL
                .iter()
                .map(|&d| runs_in_direction(&g, d, usize::MAX))
                .sum();
            prop_assert_eq!(is_mutant(&g), total >= 2);
        }
    }
}

//! Positional scoring matrices
//!
//! Fixed per-size tables weighting each cell by its strategic value. They
//! drive both move ordering and the depth-limited evaluation, so two agents
//! on the same board size always rank cells identically.

use crate::{Error, Result};

#[rustfmt::skip]
const SIZE_3: [i32; 9] = [
    3, 2, 3,
    2, 4, 2,
    3, 2, 3,
];

#[rustfmt::skip]
const SIZE_4: [i32; 16] = [
    3, 2, 2, 3,
    2, 3, 3, 2,
    2, 3, 3, 2,
    3, 2, 2, 3,
];

#[rustfmt::skip]
const SIZE_5: [i32; 25] = [
    3, 2, 2, 2, 3,
    2, 3, 3, 3, 2,
    2, 3, 4, 3, 2,
    2, 3, 3, 3, 2,
    3, 2, 2, 2, 3,
];

/// Read-only view of the scoring table for one board size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringMatrix {
    size: usize,
    weights: &'static [i32],
}

impl ScoringMatrix {
    /// Look up the table for `size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBoardSize`] for sizes other than 3, 4 and 5.
    pub fn for_size(size: usize) -> Result<Self> {
        let weights: &'static [i32] = match size {
            3 => &SIZE_3,
            4 => &SIZE_4,
            5 => &SIZE_5,
            _ => return Err(Error::UnsupportedBoardSize { size }),
        };
        Ok(ScoringMatrix { size, weights })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the cell at a row-major index
    pub fn weight(&self, index: usize) -> i32 {
        self.weights[index]
    }

    pub fn weight_at(&self, row: usize, col: usize) -> i32 {
        self.weights[row * self.size + col]
    }

    /// Rows of the table, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'static [i32]> {
        self.weights.chunks(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_sizes() {
        for size in 3..=5 {
            let matrix = ScoringMatrix::for_size(size).unwrap();
            assert_eq!(matrix.size(), size);
            assert_eq!(matrix.rows().count(), size);
        }
    }

    #[test]
    fn test_unsupported_sizes() {
        for size in [0, 1, 2, 6, 9] {
            assert!(matches!(
                ScoringMatrix::for_size(size),
                Err(Error::UnsupportedBoardSize { size: s }) if s == size
            ));
        }
    }

    #[test]
    fn test_centre_is_heaviest() {
        let three = ScoringMatrix::for_size(3).unwrap();
        assert_eq!(three.weight_at(1, 1), 4);
        assert_eq!(three.weight(4), 4);
        assert_eq!(three.weight_at(0, 1), 2);

        let five = ScoringMatrix::for_size(5).unwrap();
        assert_eq!(five.weight_at(2, 2), 4);
        assert_eq!(five.weight_at(0, 0), 3);
    }

    #[test]
    fn test_tables_are_symmetric() {
        for size in 3..=5 {
            let matrix = ScoringMatrix::for_size(size).unwrap();
            for row in 0..size {
                for col in 0..size {
                    let w = matrix.weight_at(row, col);
                    assert_eq!(w, matrix.weight_at(col, row));
                    assert_eq!(w, matrix.weight_at(size - 1 - row, col));
                    assert_eq!(w, matrix.weight_at(row, size - 1 - col));
                }
            }
        }
    }
}

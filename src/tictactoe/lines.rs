//! Winning line analysis
//!
//! Only full-length lines count: every row, every column, and the two
//! diagonals that span the whole board.

use super::{Board, Cell, Mark};

/// A straight line across the board, given by its first cell and a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (isize, isize),
    pub step: (isize, isize),
}

impl Line {
    const fn new(start: (isize, isize), step: (isize, isize)) -> Self {
        Line { start, step }
    }
}

/// All lines eligible for a win on a board of `size`, in scan order:
/// diagonal down, diagonal up, then row `i` and column `i` for each `i`.
pub fn winning_lines(size: usize) -> Vec<Line> {
    let n = size as isize;
    let mut lines = Vec::with_capacity(2 * size + 2);
    lines.push(Line::new((0, 0), (1, 1)));
    lines.push(Line::new((n - 1, 0), (-1, 1)));
    for i in 0..n {
        lines.push(Line::new((i, 0), (0, 1)));
        lines.push(Line::new((0, i), (1, 0)));
    }
    lines
}

impl Board {
    /// Walk from `start` by `step` while inside the board.
    ///
    /// Returns the mark if every visited cell holds that same mark, `None`
    /// if any cell is empty or two marks differ.
    pub(crate) fn line_winner(&self, start: (isize, isize), step: (isize, isize)) -> Option<Mark> {
        debug_assert!(step != (0, 0), "a line must advance");
        let n = self.size() as isize;
        let in_bounds = |(row, col): (isize, isize)| (0..n).contains(&row) && (0..n).contains(&col);

        let mut owner = None;
        let mut point = start;
        while in_bounds(point) {
            let index = (point.0 * n + point.1) as usize;
            match (self.cells()[index], owner) {
                (Cell::Empty, _) => return None,
                (Cell::Taken(mark), None) => owner = Some(mark),
                (Cell::Taken(mark), Some(current)) if mark != current => return None,
                (Cell::Taken(_), Some(_)) => {}
            }
            point = (point.0 + step.0, point.1 + step.1);
        }
        owner
    }

    /// The mark owning a full row, column, or main diagonal, if any.
    ///
    /// Lines are scanned in [`winning_lines`] order and the first match is
    /// returned.
    pub fn winner(&self) -> Option<Mark> {
        winning_lines(self.size())
            .into_iter()
            .find_map(|line| self.line_winner(line.start, line.step))
    }
}

//! Static evaluation of search leaves

use super::scoring::ScoringMatrix;
use crate::{
    Result,
    tictactoe::{Board, Cell, Mark},
};

/// Score of a board won by the evaluating side
pub const WIN_SCORE: i32 = 1000;
/// Score of a board lost by the evaluating side
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// Score of a full board without a winner
pub const DRAW_SCORE: i32 = 0;

/// Score `board` from the point of view of `side`.
///
/// Terminal boards score [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`].
/// Any other board sums the positional weight of every occupied cell,
/// added for `side` and subtracted for the opponent.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedBoardSize`] when a non-terminal board
/// has no scoring matrix.
///
/// # Examples
///
/// ```
/// use minimax_ttt::minimax::evaluate;
/// use minimax_ttt::tictactoe::{Board, Mark};
///
/// let mut board = Board::new(3).unwrap();
/// board.register_move(4).unwrap(); // o takes the centre
/// board.register_move(0).unwrap(); // x takes a corner
/// assert_eq!(evaluate(&board, Mark::CIRCLE).unwrap(), 4 - 3);
/// assert_eq!(evaluate(&board, Mark::CROSS).unwrap(), 3 - 4);
/// ```
pub fn evaluate(board: &Board, side: Mark) -> Result<i32> {
    match board.winner() {
        Some(winner) if winner == side => return Ok(WIN_SCORE),
        Some(_) => return Ok(LOSS_SCORE),
        None if board.is_full() => return Ok(DRAW_SCORE),
        None => {}
    }

    let matrix = ScoringMatrix::for_size(board.size())?;
    let score = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| match cell {
            Cell::Empty => 0,
            Cell::Taken(mark) if *mark == side => matrix.weight(index),
            Cell::Taken(_) => -matrix.weight(index),
        })
        .sum();
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn board(text: &str) -> Board {
        Board::from_string(text).unwrap()
    }

    #[test]
    fn test_win_and_loss() {
        let won = board("ooo/xx./...");
        assert_eq!(evaluate(&won, Mark::CIRCLE).unwrap(), WIN_SCORE);
        assert_eq!(evaluate(&won, Mark::CROSS).unwrap(), LOSS_SCORE);
    }

    #[test]
    fn test_full_board_draw_is_zero_for_both_sides() {
        let drawn = board("oxo/oxx/xoo");
        assert_eq!(evaluate(&drawn, Mark::CIRCLE).unwrap(), 0);
        assert_eq!(evaluate(&drawn, Mark::CROSS).unwrap(), 0);
    }

    #[test]
    fn test_positional_sum() {
        // o: corner 3 + centre 4, x: edge 2
        let b = board("ox./.o./...");
        assert_eq!(evaluate(&b, Mark::CIRCLE).unwrap(), 3 + 4 - 2);
        assert_eq!(evaluate(&b, Mark::CROSS).unwrap(), 2 - 3 - 4);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        for size in 3..=5 {
            let b = Board::new(size).unwrap();
            assert_eq!(evaluate(&b, Mark::CIRCLE).unwrap(), 0);
        }
    }

    #[test]
    fn test_unsupported_size_only_matters_off_terminal() {
        let open = Board::new(6).unwrap();
        assert!(matches!(
            evaluate(&open, Mark::CIRCLE),
            Err(Error::UnsupportedBoardSize { size: 6 })
        ));

        let mut won = Board::new(1).unwrap();
        won.register_move(0).unwrap();
        assert_eq!(evaluate(&won, Mark::CIRCLE).unwrap(), WIN_SCORE);
    }
}

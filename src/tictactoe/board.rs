//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Glyph used for an empty cell when rendering
pub const EMPTY_GLYPH: char = ' ';

/// A player's mark, identified by the glyph it leaves on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark(char);

impl Mark {
    pub const CIRCLE: Mark = Mark('o');
    pub const CROSS: Mark = Mark('x');

    pub fn new(glyph: char) -> Self {
        Mark(glyph)
    }

    pub fn glyph(self) -> char {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Taken(mark) => mark.glyph(),
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// N x N board with the side to move and the two marks in play order.
///
/// Cells are stored row-major, so index `row * size + col` addresses
/// `(row, col)`. Cloning copies the cell vector, so a clone can be played on
/// without touching the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    to_move: usize,
    marks: [Mark; 2],
}

impl Board {
    /// Create an empty board with `o` moving first and `x` second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardSize`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimax_ttt::tictactoe::{Board, Mark};
    ///
    /// let board = Board::new(3).unwrap();
    /// assert_eq!(board.to_move(), Mark::CIRCLE);
    /// assert_eq!(board.empty_indices().len(), 9);
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        Self::with_marks(size, [Mark::CIRCLE, Mark::CROSS])
    }

    /// Create an empty board with a custom pair of marks; `marks[0]` moves first.
    ///
    /// # Errors
    ///
    /// Returns error if `size` is zero, the marks are identical, or either
    /// mark uses the empty-cell glyph.
    pub fn with_marks(size: usize, marks: [Mark; 2]) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidBoardSize { size });
        }
        if marks[0] == marks[1] {
            return Err(Error::InvalidConfiguration {
                message: format!("both players cannot use the mark '{}'", marks[0]),
            });
        }
        if marks.iter().any(|mark| mark.glyph() == EMPTY_GLYPH) {
            return Err(Error::InvalidConfiguration {
                message: "a player mark cannot be the empty-cell glyph".to_string(),
            });
        }

        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            to_move: 0,
            marks,
        })
    }

    /// Parse a board from its cell glyphs, row-major.
    ///
    /// `o` and `x` are marks; `.`, `_` and `-` are empty cells. Whitespace,
    /// `/` and `|` are ignored so rows can be separated. The number of cells
    /// must be a perfect square. The side to move is inferred from the piece
    /// counts: equal counts mean `o` moves, one extra `o` means `x` moves.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not square, a glyph is unknown, or
    /// the piece counts cannot arise from alternating play.
    pub fn from_string(text: &str) -> Result<Self> {
        let glyphs: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        let size = glyphs.len().isqrt();
        if size == 0 || size * size != glyphs.len() {
            return Err(Error::InvalidBoardLength {
                got: glyphs.len(),
                context: text.to_string(),
            });
        }

        let mut board = Self::new(size)?;
        for (position, &c) in glyphs.iter().enumerate() {
            board.cells[position] = board.parse_cell(c).ok_or_else(|| {
                Error::InvalidCellCharacter {
                    character: c,
                    position,
                    context: text.to_string(),
                }
            })?;
        }

        let [first, second] = board.marks;
        let first_count = board.count_of(first);
        let second_count = board.count_of(second);
        board.to_move = if first_count == second_count {
            0
        } else if first_count == second_count + 1 {
            1
        } else {
            return Err(Error::InvalidPieceCounts {
                first,
                first_count,
                second,
                second_count,
            });
        };

        Ok(board)
    }

    fn parse_cell(&self, c: char) -> Option<Cell> {
        match c.to_ascii_lowercase() {
            '.' | '_' | '-' => Some(Cell::Empty),
            glyph => self
                .marks
                .iter()
                .find(|mark| mark.glyph() == glyph)
                .map(|&mark| Cell::Taken(mark)),
        }
    }

    fn count_of(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Taken(mark))
            .count()
    }

    /// Board dimension N
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// The two marks in play order
    pub fn marks(&self) -> [Mark; 2] {
        self.marks
    }

    /// Index (0 or 1) of the player to move
    pub fn to_move_index(&self) -> usize {
        self.to_move
    }

    /// Mark of the player to move
    pub fn to_move(&self) -> Mark {
        self.marks[self.to_move]
    }

    /// The other mark in play, or `None` if `mark` is not one of this board's marks
    pub fn opponent_of(&self, mark: Mark) -> Option<Mark> {
        match self.marks {
            [first, second] if mark == first => Some(second),
            [first, second] if mark == second => Some(first),
            _ => None,
        }
    }

    /// Map a flat index to `(row, col)`
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Row-major indices of every empty cell; empty when the board is full
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Place the current player's mark at `index` and pass the turn.
    ///
    /// Returns the mark of the player who moves next. This is the only way
    /// to change a board, and the only place an illegal move is detected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MoveOutOfBounds`] or [`Error::CellOccupied`]; the
    /// board is left unchanged in both cases.
    pub fn register_move(&mut self, index: usize) -> Result<Mark> {
        let player = self.to_move();
        match self.cells.get(index) {
            None => {
                return Err(Error::MoveOutOfBounds {
                    player,
                    index,
                    cells: self.cells.len(),
                    board: self.render(),
                });
            }
            Some(Cell::Taken(occupant)) => {
                return Err(Error::CellOccupied {
                    player,
                    occupant: *occupant,
                    index,
                    board: self.render(),
                });
            }
            Some(Cell::Empty) => {}
        }

        self.cells[index] = Cell::Taken(player);
        self.to_move = (self.to_move + 1) % self.marks.len();
        Ok(self.to_move())
    }

    /// Render the board inside a border, one row per line.
    ///
    /// ```
    /// use minimax_ttt::tictactoe::Board;
    ///
    /// let mut board = Board::new(3).unwrap();
    /// board.register_move(4).unwrap();
    /// assert_eq!(board.render(), " --- \n|   |\n| o |\n|   |\n --- \n");
    /// ```
    pub fn render(&self) -> String {
        let horizontal = format!(" {} \n", "-".repeat(self.size));
        let mut output = horizontal.clone();
        for row in self.cells.chunks(self.size) {
            output.push('|');
            output.extend(row.iter().map(|cell| cell.to_char()));
            output.push_str("|\n");
        }
        output.push_str(&horizontal);
        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

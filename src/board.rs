use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight index triples whose uniform occupation wins the game.
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub const LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two sides of the search.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Side {
    /// The side whose win scores `+1`. Conventionally the automated player, drawn as `O`.
    Maximizer,
    /// The side whose win scores `-1`. Conventionally the human player, drawn as `X`.
    Minimizer,
}

impl Side {
    /// Returns the side that moves after this one.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Maximizer => Side::Minimizer,
            Side::Minimizer => Side::Maximizer,
        }
    }

    /// Returns the character used for this side's mark.
    pub const fn symbol(self) -> char {
        match self {
            Side::Maximizer => 'O',
            Side::Minimizer => 'X',
        }
    }

    /// Returns `true` if `score` is strictly better than `current` for this side.
    ///
    /// Ties never count as an improvement, which keeps the first of several
    /// equally good moves.
    pub const fn prefers(self, score: i32, current: i32) -> bool {
        match self {
            Side::Maximizer => score > current,
            Side::Minimizer => score < current,
        }
    }
}

/// The state of a single cell.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the mark of a side.
    Mark(Side),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(side) => side.symbol(),
        }
    }
}

/// The value of a position as seen by the search.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    /// The Maximizer owns a complete line.
    MaximizerWins,
    /// The Minimizer owns a complete line.
    MinimizerWins,
    /// The board is full and nobody owns a line.
    Draw,
    /// The game is still going; the position has no fixed value yet.
    Ongoing,
}

impl Outcome {
    /// Converts a terminal outcome into its payoff: `+1`, `-1` or `0`.
    ///
    /// Returns `None` for `Outcome::Ongoing`.
    pub const fn score(self) -> Option<i32> {
        match self {
            Outcome::MaximizerWins => Some(1),
            Outcome::MinimizerWins => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Ongoing => None,
        }
    }

    /// Returns `true` for every outcome except `Outcome::Ongoing`.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// A 3x3 tic-tac-toe board, indexed 0 to 8 in row-major order.
///
/// The board is a plain value: the engine copies it before searching, so a
/// caller's board is never touched by a query.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from nine cells in row-major order.
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns all nine cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` when the index is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns `true` if `index` is on the board and holds no mark.
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index) == Some(Cell::Empty)
    }

    /// Puts `side`'s mark on `index`, overwriting whatever was there.
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn place(&mut self, index: u8, side: Side) {
        self.cells[index as usize] = Cell::Mark(side);
    }

    /// Empties the cell at `index`.
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn clear(&mut self, index: u8) {
        self.cells[index as usize] = Cell::Empty;
    }

    /// Returns the number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns `true` if `side` owns at least one complete line.
    pub fn has_won(&self, side: Side) -> bool {
        let target = Cell::Mark(side);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == target))
    }

    /// Classifies the position.
    ///
    /// The Maximizer's lines are checked before the Minimizer's, so a board
    /// where both sides own a line reports `Outcome::MaximizerWins`.
    pub fn outcome(&self) -> Outcome {
        if self.has_won(Side::Maximizer) {
            Outcome::MaximizerWins
        } else if self.has_won(Side::Minimizer) {
            Outcome::MinimizerWins
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Returns `true` if a line is complete or no empty cell remains.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Returns the indices of all empty cells in increasing order.
    ///
    /// Unlike `outcome`, this does not look at wins: a won board with empty
    /// cells still lists them.
    pub fn available_moves(&self) -> Vec<u8> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i as u8)
            .collect()
    }
}

impl fmt::Display for Board {
    /// Renders the grid the way the console front end prints it:
    ///
    /// ```text
    ///  O | X |
    /// ---|---|---
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---|---|---")?;
            }
            writeln!(
                f,
                " {} | {} | {} ",
                chunk[0].symbol(),
                chunk[1].symbol(),
                chunk[2].symbol()
            )?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine row-major characters: `O` for the Maximizer, `X` for the
    /// Minimizer and any of `' '`, `'.'`, `'_'`, `'-'` for an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let got = s.chars().count();
        if got != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got,
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, character) in s.chars().enumerate() {
            cells[position] = match character {
                'O' | 'o' => Cell::Mark(Side::Maximizer),
                'X' | 'x' => Cell::Mark(Side::Minimizer),
                ' ' | '.' | '_' | '-' => Cell::Empty,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
        }
        Ok(Board::from_cells(cells))
    }
}

//! Core domain types for tic-tac-toe.

use super::coord::Coord;
use serde::{Deserialize, Serialize};

/// Player symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Player X (moves first by default).
    X,
    /// Player O.
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by a player. Never changes afterwards.
    Mark(Symbol),
}

impl Cell {
    /// Character used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(Symbol::X) => 'X',
            Cell::Mark(Symbol::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Marks an empty cell with `symbol`.
    ///
    /// The caller checks emptiness first; the monitor does so under its lock.
    pub fn apply(&mut self, coord: Coord, symbol: Symbol) {
        debug_assert!(self.is_empty(coord), "cell {coord} is already marked");
        self.cells[coord.row()][coord.col()] = Cell::Mark(symbol);
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn cells_mut_for_test(&mut self) -> &mut [[Cell; 3]; 3] {
        &mut self.cells
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|c| *c != Cell::Empty).count()
    }

    /// Formats the board: one line per row, each cell followed by a space,
    /// then a blank line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(24);
        for row in &self.cells {
            for cell in row {
                out.push(cell.glyph());
                out.push(' ');
            }
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Outcome of the match so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// No winner yet and free cells remain.
    #[default]
    InProgress,
    /// A player completed a line (or the opponent resigned).
    Win(Symbol),
    /// Board full with no completed line.
    Draw,
}

impl GameResult {
    /// True once the result is terminal.
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameResult::Win(symbol) => Some(symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(symbol) => write!(f, "Player {} wins!", symbol),
            GameResult::Draw => write!(f, "It's a draw!"),
        }
    }
}

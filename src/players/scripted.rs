//! Fixed list of proposals, for replays and deterministic matches.

use super::Policy;
use crate::games::tictactoe::Coord;

/// Proposes the given cells in order, then nothing.
#[derive(Debug, Clone)]
pub struct Scripted {
    cells: Vec<Coord>,
    next: usize,
}

impl Scripted {
    /// Creates a script from coordinates.
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            next: 0,
        }
    }

    /// Creates a script from row-major indices (0-8). Indices past 8 are dropped.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(
            indices
                .into_iter()
                .filter_map(|i| Coord::ALL.get(i).copied()),
        )
    }
}

impl Policy for Scripted {
    fn next_proposal(&mut self) -> Option<Coord> {
        let coord = self.cells.get(self.next).copied()?;
        self.next += 1;
        Some(coord)
    }

    fn restart(&mut self) -> bool {
        self.next = 0;
        !self.cells.is_empty()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

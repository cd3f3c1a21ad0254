//! Row-major scan policy.

use super::Policy;
use crate::games::tictactoe::Coord;

/// Proposes (0,0), (0,1), ... (2,2) once each, then nothing.
#[derive(Debug, Clone, Default)]
pub struct Sequential {
    next: usize,
}

impl Sequential {
    /// Creates a scan starting at the top-left cell.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for Sequential {
    fn next_proposal(&mut self) -> Option<Coord> {
        let coord = Coord::ALL.get(self.next).copied()?;
        self.next += 1;
        Some(coord)
    }

    fn restart(&mut self) -> bool {
        self.next = 0;
        true
    }

    fn name(&self) -> &str {
        "sequential"
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). No locking happens here;
//! the monitor calls these while it holds the board.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_draw};
pub use win::{LINES, check_win, check_winner};

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game state machine and hosts can compose them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::evaluate;
pub use win::{LINES, check_winner, winning_line};

//! Noughts - tic-tac-toe game-state engine.
//!
//! Pure, host-agnostic rules for a 3x3 game of tic-tac-toe:
//!
//! - **Evaluation**: [`evaluate`] tells whether a board is won, tied or still
//!   in progress.
//! - **Moves**: [`apply_move`] and [`reset`] are pure functions over a
//!   [`Board`] and a [`Turn`]; [`Game`] wraps them in a state machine that
//!   refuses moves once the game is over.
//! - **Hosts**: [`Controller`] processes one selection at a time and reports
//!   each [`GameEvent`] to a [`GameObserver`].
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 3] {
//!     game.play(index)?;
//! }
//! assert_eq!(game.play(2)?, GameStatus::Won(Player::X));
//! assert!(game.play(8).is_err());
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod game;
pub mod invariants;
mod notation;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use controller::{Controller, EventLog, GameEvent, GameObserver};
pub use game::{Game, RestoreError, apply_move, position_for, reset};
pub use notation::BoardParseError;
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square, Turn};

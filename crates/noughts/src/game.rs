//! Move application and the game state machine.
//!
//! [`apply_move`] and [`reset`] are pure: they take a board and a turn and
//! hand back new ones. [`Game`] wraps them in the InProgress → Terminal →
//! reset lifecycle and keeps the move history.

use super::action::{Move, MoveError};
use super::rules::evaluate;
use super::{Board, GameStatus, Player, Position, Square, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Converts a raw cell index to a position.
///
/// # Errors
///
/// Returns [`MoveError::OutOfRange`] for indices past 8.
pub fn position_for(index: usize) -> Result<Position, MoveError> {
    Position::from_index(index).ok_or(MoveError::OutOfRange(index))
}

/// Places `turn`'s mark at `index` and passes the turn.
///
/// The inputs are left untouched; on success the new board and the next
/// turn are returned.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `index` is past 8.
/// - [`MoveError::SquareOccupied`] if the cell already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, turn: Turn, index: usize) -> Result<(Board, Turn), MoveError> {
    let position = position_for(index)?;
    if !board.is_empty(position) {
        return Err(MoveError::SquareOccupied(position));
    }

    let mut next = *board;
    next.set(position, Square::Occupied(turn));
    Ok((next, turn.opponent()))
}

/// The starting board and turn: nine empty squares, X to move.
pub fn reset() -> (Board, Turn) {
    (Board::new(), Player::X)
}

/// Tic-tac-toe game engine.
///
/// Accepts moves while in progress, refuses them once the game is won or
/// tied, and returns to the starting state on [`Game::reset`].
///
/// Deserializing replays the recorded history, so a restored game is only
/// accepted when its board, turn and status agree with that history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Turn,
    status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        let (board, turn) = reset();
        Self {
            board,
            turn,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds a game by playing cell indices in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.play(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Plays the current turn's mark at a cell index (0-8).
    ///
    /// Returns the status after the move. Once that status is terminal,
    /// every further move is refused until [`Game::reset`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or tied.
    /// - [`MoveError::OutOfRange`] if `index` is past 8.
    /// - [`MoveError::SquareOccupied`] if the cell already holds a mark.
    ///
    /// A rejected move leaves the game untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Move refused, game is over");
            return Err(MoveError::GameOver(self.status));
        }

        let (board, next) = apply_move(&self.board, self.turn, index)?;
        let position = position_for(index)?;

        self.history.push(Move::new(self.turn, position));
        self.board = board;
        self.turn = next;
        self.status = evaluate(&self.board);
        debug!(%position, status = %self.status, "Move accepted");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        }

        Ok(self.status)
    }

    /// Plays the current turn's mark at a position.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play`], minus the range check.
    pub fn play_at(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        self.play(position.to_index())
    }

    /// Clears the board and gives X the first move.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                tracing::warn!(description = %violation.description, "Game invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a serialized game could not be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RestoreError {
    /// A history entry was refused when replayed.
    #[display("Move {} in history was refused: {}", move_number, error)]
    IllegalMove {
        /// 1-based position of the entry in the history.
        move_number: usize,
        /// The rejection.
        error: MoveError,
    },

    /// A history entry was made by the player not on turn.
    #[display("Move {} in history was played out of turn by {}", move_number, player)]
    OutOfTurn {
        /// 1-based position of the entry in the history.
        move_number: usize,
        /// The player recorded for the entry.
        player: Player,
    },

    /// A recorded field disagrees with the replayed history.
    #[display("Recorded {} does not match the move history", _0)]
    Mismatch(&'static str),
}

impl std::error::Error for RestoreError {}

/// Serialized form of [`Game`], checked before it becomes one.
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    turn: Turn,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<GameRecord> for Game {
    type Error = RestoreError;

    #[instrument(skip(record), fields(moves = record.history.len()))]
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut game = Self::new();
        for (n, mov) in record.history.iter().enumerate() {
            let move_number = n + 1;
            if mov.player != game.turn {
                return Err(RestoreError::OutOfTurn {
                    move_number,
                    player: mov.player,
                });
            }
            game.play_at(mov.position)
                .map_err(|error| RestoreError::IllegalMove { move_number, error })?;
        }

        if game.board != record.board {
            return Err(RestoreError::Mismatch("board"));
        }
        if game.turn != record.turn {
            return Err(RestoreError::Mismatch("turn"));
        }
        if game.status != record.status {
            return Err(RestoreError::Mismatch("status"));
        }

        debug!(status = %game.status, "Game restored");
        Ok(game)
    }
}

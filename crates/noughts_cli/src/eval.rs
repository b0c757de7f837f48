//! One-shot board evaluation for the `eval` command.

use noughts::{Board, BoardParseError, GameStatus, Position, evaluate, winning_line};
use serde::Serialize;
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The board in canonical notation.
    pub board: String,
    /// Evaluated status.
    pub status: GameStatus,
    /// Cell indices of the deciding line, if the board is won.
    pub line: Option<[usize; 3]>,
}

/// Parses a board in compact notation and evaluates it.
///
/// # Errors
///
/// Returns the parse error for malformed notation.
#[instrument]
pub fn evaluate_notation(notation: &str) -> Result<Evaluation, BoardParseError> {
    let board: Board = notation.parse()?;
    let line = winning_line(&board).map(|(line, _)| line.map(Position::to_index));
    Ok(Evaluation {
        board: board.to_string(),
        status: evaluate(&board),
        line,
    })
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some([a, b, c]) = self.line {
            write!(f, " (cells {}-{}-{})", a, b, c)?;
        }
        Ok(())
    }
}

//! Game-state evaluation.

use super::super::{Board, GameStatus};
use super::{is_full, win::check_winner};
use tracing::instrument;

/// Evaluates a board.
///
/// A completed line wins, checked in [`LINES`](super::LINES) order.
/// Otherwise any empty square means the game is still in progress, and a
/// full board is a tie. Works on any arrangement, legal or not.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }

    if is_full(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_not_a_tie() {
        // X completes the top row with the last empty square.
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_tied_board() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Tied);
    }

    #[test]
    fn test_one_empty_square_in_progress() {
        let board: Board = "XOX/OXX/OX.".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }
}

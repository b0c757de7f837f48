//! Text rendering of the board and status lines.

use crate::input::Numbering;
use noughts::{Board, GameStatus, Player, Position, Square, Turn};

/// Formats the board as a 3x3 grid.
///
/// Empty squares show their cell number when `show_indices` is set.
pub fn board_grid(board: &Board, show_indices: bool, numbering: Numbering) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let symbol = match board.get(pos) {
                Square::Empty if show_indices => numbering.label(pos).to_string(),
                Square::Empty => " ".to_string(),
                Square::Occupied(Player::X) => "X".to_string(),
                Square::Occupied(Player::O) => "O".to_string(),
            };
            result.push(' ');
            result.push_str(&symbol);
            result.push(' ');
            if col < 2 {
                result.push('|');
            }
        }
        result.push('\n');
        if row < 2 {
            result.push_str("---+---+---\n");
        }
    }
    result
}

/// Whose move it is, e.g. `"X's turn"`.
pub fn turn_line(turn: Turn) -> String {
    format!("{turn}'s turn")
}

/// Announcement for a finished game, e.g. `"Game Over: O won!"`.
pub fn game_over_line(status: GameStatus) -> String {
    format!("Game Over: {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_numbered() {
        let grid = board_grid(&Board::new(), true, Numbering::OneBased);
        assert_eq!(
            grid,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_marks_and_zero_based_numbers() {
        let board: Board = "X../.O./...".parse().unwrap();
        let grid = board_grid(&board, true, Numbering::ZeroBased);
        assert!(grid.starts_with(" X | 1 | 2 \n"));
        assert!(grid.contains(" 3 | O | 5 \n"));
    }

    #[test]
    fn test_hidden_indices() {
        let board: Board = "X../.../..O".parse().unwrap();
        let grid = board_grid(&board, false, Numbering::OneBased);
        assert_eq!(
            grid,
            " X |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   | O \n"
        );
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(turn_line(Player::O), "O's turn");
        assert_eq!(game_over_line(GameStatus::Tied), "Game Over: Tied Game!");
        assert_eq!(
            game_over_line(GameStatus::Won(Player::X)),
            "Game Over: X won!"
        );
    }
}

//! Compact text notation for boards.
//!
//! Nine cells in row-major order: `X`, `O`, or one of `.`, `-`, `_` for an
//! empty square. `/` and whitespace are ignored, so `"XO./.X./..O"` and
//! `"XO. .X. ..O"` describe the same board. Letters are case-insensitive.

use super::types::{Board, Player, Square};
use std::str::FromStr;

/// Error parsing a board from notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// The notation did not describe exactly nine cells.
    #[display("Board needs 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        for c in s.chars() {
            let square = match c {
                '/' => continue,
                c if c.is_whitespace() => continue,
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
            if count < squares.len() {
                squares[count] = square;
            }
            count += 1;
        }

        if count != squares.len() {
            return Err(BoardParseError::WrongLength(count));
        }

        Ok(Board::from_squares(squares))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, square) in self.squares().iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                f.write_str("/")?;
            }
            let c = match square.mark() {
                None => '.',
                Some(Player::X) => 'X',
                Some(Player::O) => 'O',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.occupied(), 4);
    }

    #[test]
    fn test_parse_accepts_lowercase_and_spaces() {
        let a: Board = "xo- -x- --o".parse().unwrap();
        let b: Board = "XO..X...O".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_bad_char() {
        assert_eq!(
            "XOZ/.../...".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Z'))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "........._".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
    }

    #[test]
    fn test_display_uses_row_separators() {
        let board: Board = "XO..X...O".parse().unwrap();
        assert_eq!(board.to_string(), "XO./.X./..O");
        assert_eq!(Board::new().to_string(), ".../.../...");
    }
}

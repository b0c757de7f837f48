//! Parsing of typed commands during play.

use derive_more::Display;
use noughts::Position;
use tracing::instrument;

/// How cells are numbered on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numbering {
    /// Cells 1-9, like a phone keypad read left to right.
    #[default]
    OneBased,
    /// Cells 0-8, matching board indices.
    ZeroBased,
}

impl Numbering {
    /// The number shown for `position`.
    pub fn label(self, position: Position) -> usize {
        self.number(position.to_index())
    }

    /// The number a user types for board `index`, on or off the board.
    pub fn number(self, index: usize) -> usize {
        match self {
            Numbering::OneBased => index + 1,
            Numbering::ZeroBased => index,
        }
    }

    /// Range shown in prompts, e.g. `"1-9"`.
    pub fn range(self) -> &'static str {
        match self {
            Numbering::OneBased => "1-9",
            Numbering::ZeroBased => "0-8",
        }
    }

    fn to_index(self, number: usize) -> Option<usize> {
        match self {
            Numbering::OneBased => number.checked_sub(1),
            Numbering::ZeroBased => Some(number),
        }
    }
}

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Select a cell by board index (0-8 when valid; range is checked by the game).
    Cell(usize),
    /// Abandon or finish the current game and start over.
    NewGame,
    /// Leave.
    Quit,
    /// Show the command summary.
    Help,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Type a cell number, 'n' for a new game, or 'q' to quit")]
    Empty,
    /// A number below the first cell.
    #[display("Cells are numbered {}", _0)]
    BelowRange(&'static str),
    /// Neither a number, a position name, nor a command.
    #[display("Unknown command {:?} (type 'h' for help)", _0)]
    Unknown(String),
}

impl std::error::Error for InputError {}

/// Parses one line typed at the prompt.
#[instrument]
pub fn parse_input(line: &str, numbering: Numbering) -> Result<Input, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return numbering
            .to_index(number)
            .map(Input::Cell)
            .ok_or(InputError::BelowRange(numbering.range()));
    }

    match trimmed.to_lowercase().as_str() {
        "n" | "new" | "new game" | "reset" => return Ok(Input::NewGame),
        "q" | "quit" | "exit" => return Ok(Input::Quit),
        "h" | "help" | "?" => return Ok(Input::Help),
        _ => {}
    }

    Position::from_label(trimmed)
        .map(|pos| Input::Cell(pos.to_index()))
        .ok_or_else(|| InputError::Unknown(trimmed.to_string()))
}

//! Interactive hot-seat play over any line reader and writer.

use crate::input::{Input, Numbering, parse_input};
use crate::render::{board_grid, game_over_line, turn_line};
use crate::settings::Settings;
use anyhow::{Context, Result};
use noughts::{Controller, EventLog, GameEvent, GameStatus, MoveError, Player};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <number>      place your mark on that cell
  <name>        place by position name, e.g. 'center' or 'top-left'
  n, new        start a new game
  q, quit       leave
  h, help       show this message";

/// Results of the games finished in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Tied games.
    pub ties: u32,
}

impl Scoreboard {
    /// Counts a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} - O {} - Ties {}",
            self.x_wins, self.o_wins, self.ties
        )
    }
}

/// Terminal session: reads commands, drives the controller, prints results.
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
    numbering: Numbering,
    controller: Controller<EventLog>,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(input: R, output: W, settings: Settings, numbering: Numbering) -> Self {
        Self {
            input,
            output,
            settings,
            numbering,
            controller: Controller::new(EventLog::new()),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Plays until `quit` or end of input and returns the score.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Scoreboard> {
        info!("Starting terminal session");
        writeln!(self.output, "Tic-Tac-Toe")?;
        writeln!(self.output)?;
        self.print_board()?;
        self.print_prompt_line()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }

            match parse_input(&line, self.numbering) {
                Ok(Input::Cell(index)) => {
                    if let Err(err) = self.controller.tap(index) {
                        debug!(%err, "Cell not played");
                    }
                    self.flush_events()?;
                    if self.controller.game().status().is_terminal()
                        && *self.settings.auto_new_game()
                    {
                        self.controller.new_game();
                        self.flush_events()?;
                    }
                }
                Ok(Input::NewGame) => {
                    self.controller.new_game();
                    self.flush_events()?;
                }
                Ok(Input::Quit) => break,
                Ok(Input::Help) => writeln!(self.output, "{HELP}")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }

            self.print_prompt_line()?;
        }

        info!(score = %self.scoreboard, "Session finished");
        if self.scoreboard.games() > 0 {
            writeln!(self.output, "Final score: {}", self.scoreboard)?;
        }
        Ok(self.scoreboard)
    }

    fn flush_events(&mut self) -> Result<()> {
        let events = self.controller.observer_mut().drain();
        let mut redraw = false;

        for event in events {
            match event {
                GameEvent::MoveAccepted(mov) => {
                    debug!(%mov, "Rendering accepted move");
                    redraw = true;
                }
                GameEvent::MoveRejected(MoveError::GameOver(_)) => {
                    writeln!(self.output, "The game is over. Type 'n' for a new game.")?;
                }
                GameEvent::MoveRejected(MoveError::OutOfRange(index)) => {
                    writeln!(
                        self.output,
                        "Move rejected: Cell {} is out of range (must be {})",
                        self.numbering.number(index),
                        self.numbering.range()
                    )?;
                }
                GameEvent::MoveRejected(err) => {
                    writeln!(self.output, "Move rejected: {err}")?;
                }
                GameEvent::Finished(status) => {
                    if redraw {
                        self.print_board()?;
                        redraw = false;
                    }
                    self.scoreboard.record(status);
                    writeln!(self.output, "{}", game_over_line(status))?;
                    writeln!(self.output, "Score: {}", self.scoreboard)?;
                }
                GameEvent::Reset => {
                    writeln!(self.output)?;
                    writeln!(self.output, "New game")?;
                    redraw = true;
                }
            }
        }

        if redraw {
            self.print_board()?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<()> {
        let grid = board_grid(
            self.controller.game().board(),
            *self.settings.show_indices(),
            self.numbering,
        );
        write!(self.output, "{grid}")?;
        Ok(())
    }

    fn print_prompt_line(&mut self) -> Result<()> {
        let game = self.controller.game();
        if game.status().is_terminal() {
            writeln!(self.output, "Type 'n' for a new game or 'q' to quit.")?;
        } else {
            writeln!(
                self.output,
                "{} (cell {}, or 'h' for help)",
                turn_line(game.turn()),
                self.numbering.range()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_numbered(
        script: &str,
        settings: Settings,
        numbering: Numbering,
    ) -> (Scoreboard, String) {
        let mut out = Vec::new();
        let score = Session::new(script.as_bytes(), &mut out, settings, numbering)
            .run()
            .unwrap();
        (score, String::from_utf8(out).unwrap())
    }

    fn play(script: &str, settings: Settings) -> (Scoreboard, String) {
        play_numbered(script, settings, Numbering::OneBased)
    }

    #[test]
    fn test_scoreboard_records() {
        let mut score = Scoreboard::default();
        score.record(GameStatus::Won(Player::X));
        score.record(GameStatus::Tied);
        score.record(GameStatus::InProgress);
        assert_eq!(score.games(), 2);
        assert_eq!(score.to_string(), "X 1 - O 0 - Ties 1");
    }

    #[test]
    fn test_quit_immediately() {
        let (score, out) = play("q\n", Settings::default());
        assert_eq!(score, Scoreboard::default());
        assert!(out.starts_with("Tic-Tac-Toe\n"));
        assert!(out.contains("X's turn"));
        assert!(!out.contains("Final score"));
    }

    #[test]
    fn test_occupied_cell_reported() {
        let (_, out) = play("5\n5\n", Settings::default());
        assert!(out.contains("Move rejected: Center is already occupied"));
        assert!(out.contains("O's turn"));
    }

    #[test]
    fn test_out_of_range_uses_typed_number() {
        let (_, out) = play("10\n", Settings::default());
        assert!(out.contains("Move rejected: Cell 10 is out of range (must be 1-9)"));
        assert!(!out.contains("0-8"));

        let (_, out) = play_numbered("9\n", Settings::default(), Numbering::ZeroBased);
        assert!(out.contains("Move rejected: Cell 9 is out of range (must be 0-8)"));
    }

    #[test]
    fn test_help_and_unknown() {
        let (_, out) = play("h\nbanana\n", Settings::default());
        assert!(out.contains("Commands:"));
        assert!(out.contains("Unknown command \"banana\""));
    }
}

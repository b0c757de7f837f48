//! Input-event controller for hosts.
//!
//! A host (terminal, GUI, network peer) forwards each cell selection to
//! [`Controller::tap`]. The controller applies it, evaluates the board,
//! handles the terminal transition and notifies the host's
//! [`GameObserver`] before returning, so one event is always fully
//! processed before the next is accepted.

use super::action::{Move, MoveError};
use super::{Game, GameStatus, Position};
use tracing::{debug, instrument};

/// Something that happened to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was placed on the board.
    MoveAccepted(Move),
    /// A move was refused; the game is unchanged.
    MoveRejected(MoveError),
    /// The last accepted move ended the game.
    Finished(GameStatus),
    /// The board was cleared for a new game.
    Reset,
}

/// Host callback invoked after every processed event.
pub trait GameObserver {
    /// Called with the game as it stands after `event`.
    fn on_event(&mut self, game: &Game, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&Game, &GameEvent),
{
    fn on_event(&mut self, game: &Game, event: &GameEvent) {
        self(game, event)
    }
}

/// Queues every event, for hosts that render after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the queued events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns the queued events, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, _game: &Game, event: &GameEvent) {
        self.events.push(*event);
    }
}

/// Drives a [`Game`] from discrete input events.
#[derive(Debug)]
pub struct Controller<O> {
    game: Game,
    observer: O,
}

impl<O: GameObserver> Controller<O> {
    /// Creates a controller around a fresh game.
    pub fn new(observer: O) -> Self {
        Self::with_game(Game::new(), observer)
    }

    /// Creates a controller around an existing game, e.g. a restored one.
    pub fn with_game(game: Game, observer: O) -> Self {
        Self { game, observer }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably, e.g. to drain queued events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Splits the controller into its game and observer.
    pub fn into_parts(self) -> (Game, O) {
        (self.game, self.observer)
    }

    /// Processes a selection of cell `index` (0-8).
    ///
    /// Emits [`GameEvent::MoveAccepted`] followed by
    /// [`GameEvent::Finished`] when the move ends the game, or
    /// [`GameEvent::MoveRejected`] when it is refused.
    ///
    /// # Errors
    ///
    /// Returns the rejection so the host can decide whether to surface it.
    #[instrument(skip(self))]
    pub fn tap(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        match self.game.play(index) {
            Ok(status) => {
                if let Some(mov) = self.game.history().last().copied() {
                    self.notify(GameEvent::MoveAccepted(mov));
                }
                if status.is_terminal() {
                    self.notify(GameEvent::Finished(status));
                }
                Ok(status)
            }
            Err(err) => {
                debug!(error = %err, "Selection rejected");
                self.notify(GameEvent::MoveRejected(err));
                Err(err)
            }
        }
    }

    /// Processes a selection of `position`.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::tap`].
    pub fn tap_position(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        self.tap(position.to_index())
    }

    /// Starts a new game and emits [`GameEvent::Reset`].
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.reset();
        self.notify(GameEvent::Reset);
    }

    fn notify(&mut self, event: GameEvent) {
        self.observer.on_event(&self.game, &event);
    }
}

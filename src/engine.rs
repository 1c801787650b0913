//! The game engine: state ownership, turn sequencing, and reset.
//!
//! One human turn is two placements: the human's move and, while the
//! game is still open, the opponent's automatic reply. Both run
//! synchronously inside [`Game::submit_move`], and each settles the
//! status (notifying observers on change) before the next placement
//! is considered.

use crate::action::{Move, MoveError};
use crate::events::{Observers, StatusNotification, Subscription};
use crate::invariants::assert_invariants;
use crate::opponent;
use crate::position::Position;
use crate::requests::Request;
use crate::rng::GameRng;
use crate::rules;
use crate::types::{Board, GameState, GameStatus, Mark};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine: one human against a random opponent.
///
/// The engine exclusively owns the board and status. Collaborators
/// read snapshots, submit move or reset requests, and observe status
/// changes through [`Game::subscribe`].
#[derive(Debug)]
pub struct Game {
    state: GameState,
    observers: Observers,
    rng: GameRng,
}

impl Game {
    /// The marker the human plays.
    pub const HUMAN: Mark = Mark::HUMAN;

    /// The marker the automated opponent plays.
    pub const OPPONENT: Mark = Mark::OPPONENT;

    /// Creates a new game with an entropy-seeded opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Creates a new game with a fixed seed, for reproducible play.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        info!(seed = rng.seed(), "starting new game");
        Self {
            state: GameState::new(),
            observers: Observers::new(),
            rng,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read access
    // ─────────────────────────────────────────────────────────────

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns an owned copy of the board for renderers.
    pub fn snapshot(&self) -> Board {
        self.state.board().clone()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Returns every placement since the last reset, in order.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the positions still open for a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.state.board())
    }

    // ─────────────────────────────────────────────────────────────
    //  Observer registration
    // ─────────────────────────────────────────────────────────────

    /// Registers an observer called whenever the status changes value.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&StatusNotification) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Detaches a previously registered observer.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    // ─────────────────────────────────────────────────────────────
    //  Inbound signals
    // ─────────────────────────────────────────────────────────────

    /// Dispatches a frontend signal to the matching operation.
    #[instrument(skip(self))]
    pub fn handle(&mut self, request: Request) {
        match request {
            Request::Move(mov) => match mov.cell() {
                Some(position) => self.submit_move(position),
                None => warn!(position = mov.position, "move request outside the board"),
            },
            Request::Reset => self.reset(),
        }
    }

    /// Clears the board and returns the status to in-progress.
    ///
    /// Safe at any time, including mid-game. Observers are notified
    /// only when the status actually changes (leaving a terminal
    /// state); clearing an already-running game stays silent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let was_terminal = !self.state.status().is_in_progress();
        self.state = GameState::new();
        info!("board cleared");
        if was_terminal {
            self.observers.notify(&GameStatus::InProgress);
        }
    }

    /// Submits the human's move and, while the game stays open, plays
    /// the opponent's reply as part of the same turn.
    ///
    /// Illegal requests (occupied square, game over, out of turn) are
    /// dropped without mutating state or notifying observers. Rapid or
    /// stale clicks are expected; they must not corrupt the game.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, position: Position) {
        if let Err(err) = self.apply_move(Move::new(Self::HUMAN, position)) {
            debug!(%err, "move request ignored");
            return;
        }
        if self.state.status().is_in_progress() {
            self.opponent_move();
        }
        debug!("turn complete\n{}", self.state.board().display());
    }

    /// Applies a single placement after checking its preconditions,
    /// then settles the status for the square just filled.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mov: Move) -> Result<(), MoveError> {
        if !self.state.status().is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        if mov.mark != self.state.to_move() {
            return Err(MoveError::WrongPlayer(mov.mark));
        }

        self.state.record(mov);
        self.settle_status(mov.position);
        assert_invariants(&self.state);
        Ok(())
    }

    /// Plays the opponent's turn: a uniformly random empty square.
    ///
    /// Only reached while the game is in progress, and the draw check
    /// after every placement guarantees an empty square remains.
    fn opponent_move(&mut self) {
        let Some(position) = opponent::choose_move(self.state.board(), &mut self.rng) else {
            warn!("opponent found no empty square");
            return;
        };
        if let Err(err) = self.apply_move(Move::new(Self::OPPONENT, position)) {
            warn!(%err, "opponent move rejected");
        }
    }

    /// Re-evaluates the status using the lines through the square just
    /// filled, notifying observers when the value changes.
    fn settle_status(&mut self, placed: Position) {
        if !self.state.status().is_in_progress() {
            // already decided; nothing to settle
            return;
        }

        let next = if let Some(winner) = rules::winner_through(self.state.board(), placed) {
            GameStatus::Won(winner)
        } else if rules::is_full(self.state.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        if next != *self.state.status() {
            info!(status = ?next, "status changed");
            self.state.set_status(next.clone());
            self.observers.notify(&next);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

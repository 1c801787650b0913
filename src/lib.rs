//! Single-player tic-tac-toe game engine.
//!
//! One human marker (X) plays against an automated opponent (O) that
//! moves uniformly at random among the remaining empty squares. The
//! engine owns the board and status, sequences the two-placement turn
//! (human move, then the opponent's automatic reply), detects wins and
//! draws, and notifies registered observers when the status changes.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] holds the state and runs turn sequencing,
//!   reset, and observer notification.
//! - **Rules**: pure win/draw evaluation in [`rules`], scoped to the
//!   lines through the square just filled.
//! - **Signals**: serde payloads in and out ([`Request`],
//!   [`StatusNotification`]); rendering, restart controls, and status
//!   displays live outside this crate and only exchange these.
//! - **Invariants**: first-class game properties checked after every
//!   transition in debug builds.
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{Game, GameStatus, Position};
//!
//! let mut game = Game::with_seed(7);
//! let subscription = game.subscribe(|note| {
//!     println!("status is now {:?}", note.status);
//! });
//!
//! game.submit_move(Position::Center);
//! // the opponent has already replied
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.status(), &GameStatus::InProgress);
//!
//! game.unsubscribe(subscription);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod events;
mod invariants;
mod opponent;
mod position;
mod requests;
mod rng;
pub mod rules;
mod types;

// Crate-level exports - engine
pub use engine::Game;

// Crate-level exports - domain types
pub use action::{Move, MoveError};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Mark, Square};

// Crate-level exports - signals
pub use events::{StatusNotification, Subscription};
pub use requests::{MoveRequest, Request};

// Crate-level exports - invariants
pub use invariants::{
    BalancedMarks, GameInvariants, HistoryMatchesBoard, Invariant, InvariantSet,
    InvariantViolation, StatusMatchesBoard,
};

// Crate-level exports - randomness
pub use rng::GameRng;

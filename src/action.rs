//! First-class move types.
//!
//! A placement is a domain event, not a side effect. It can be
//! validated before application, serialized, and logged.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A single placement: a marker going into a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker being placed.
    pub mark: Mark,
    /// The target square.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("the game is already over")]
    GameOver,

    /// It is not this marker's turn.
    #[display("it is not {}'s turn", _0)]
    WrongPlayer(Mark),
}

impl std::error::Error for MoveError {}

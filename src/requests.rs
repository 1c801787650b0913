//! Inbound signal payloads.
//!
//! Frontends drive the engine with two signals: a move request naming
//! a raw cell index, and a reset request with no payload. Both are
//! serde types so a networked frontend could carry them as JSON.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A request to place the human marker at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Target cell in row-major order (0 = top-left, 8 = bottom-right).
    pub position: u8,
}

impl MoveRequest {
    /// Creates a move request for the given cell index.
    pub fn new(position: u8) -> Self {
        Self { position }
    }

    /// Resolves the raw index to a board position.
    ///
    /// `None` for indices outside 0-8; such a request can never name a
    /// valid square, so callers drop it like any other illegal move.
    pub fn cell(&self) -> Option<Position> {
        Position::from_index(self.position as usize)
    }
}

/// Signals a frontend can submit to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    /// Place the human marker.
    Move(MoveRequest),
    /// Restart from an empty board.
    Reset,
}

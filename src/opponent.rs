//! The automated opponent.
//!
//! Picks uniformly at random among the remaining empty squares. No
//! lookahead, no heuristics.

use crate::position::Position;
use crate::rng::GameRng;
use crate::types::Board;
use tracing::instrument;

/// Returns a random empty position, or `None` on a full board.
#[instrument(skip(rng))]
pub fn choose_move(board: &Board, rng: &mut GameRng) -> Option<Position> {
    let open = Position::valid_moves(board);
    rng.choose(&open).copied()
}

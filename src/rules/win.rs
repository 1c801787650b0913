//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
];

const COLUMNS: [[Position; 3]; 3] = [
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
];

const DIAGONALS: [[Position; 3]; 2] = [
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks for a winner using only the lines through the square just
/// filled: its row, its column, then both diagonals, stopping at the
/// first completed line. Both diagonals are checked for every
/// placement; a square off a diagonal can never make it match.
#[instrument]
pub fn winner_through(board: &Board, placed: Position) -> Option<Mark> {
    line_owner(board, ROWS[placed.row()])
        .or_else(|| line_owner(board, COLUMNS[placed.column()]))
        .or_else(|| line_owner(board, DIAGONALS[0]))
        .or_else(|| line_owner(board, DIAGONALS[1]))
}

/// Checks every line on the board for a winner.
///
/// Returns `Some(mark)` if that marker holds three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    ROWS.iter()
        .chain(COLUMNS.iter())
        .chain(DIAGONALS.iter())
        .find_map(|line| line_owner(board, *line))
}

/// A line wins when all three squares hold the same marker.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    match board.get(a) {
        Square::Occupied(mark)
            if board.get(b) == Square::Occupied(mark)
                && board.get(c) == Square::Occupied(mark) =>
        {
            Some(mark)
        }
        _ => None,
    }
}

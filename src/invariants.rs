//! First-class game invariants.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and are asserted in debug builds
//! after every transition.

use crate::rules;
use crate::types::{GameState, GameStatus, Mark, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the stored status agrees with what the board shows.
///
/// In progress iff the board has an empty square and no completed
/// line; won iff the winner's line is on the board; drawn iff the
/// board is full with no line.
pub struct StatusMatchesBoard;

impl Invariant<GameState> for StatusMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let winner = rules::check_winner(state.board());
        let full = rules::is_full(state.board());
        let valid = match state.status() {
            GameStatus::InProgress => winner.is_none() && !full,
            GameStatus::Won(mark) => winner == Some(*mark),
            GameStatus::Draw => winner.is_none() && full,
        };
        if !valid {
            warn!(status = ?state.status(), ?winner, full, "status out of sync with board");
        }
        valid
    }

    fn description() -> &'static str {
        "game status must agree with the board contents"
    }
}

/// Invariant: mark counts stay balanced (X and O differ by at most 1).
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x_count = count_marks(state, Mark::X);
        let o_count = count_marks(state, Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "mark counts unbalanced");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O counts may differ by at most one"
    }
}

/// Invariant: the move history reproduces the board.
///
/// Every recorded move occupies its square with its mark, and the
/// number of occupied squares equals the history length.
pub struct HistoryMatchesBoard;

impl Invariant<GameState> for HistoryMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let filled = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        let consistent = state.history().len() == filled
            && state
                .history()
                .iter()
                .all(|m| state.board().get(m.position) == Square::Occupied(m.mark));
        if !consistent {
            warn!(
                history_len = state.history().len(),
                filled, "history out of sync with board"
            );
        }
        consistent
    }

    fn description() -> &'static str {
        "move history must reproduce the board"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (StatusMatchesBoard, BalancedMarks, HistoryMatchesBoard);

/// Asserts that all invariants hold (debug builds only).
pub(crate) fn assert_invariants(state: &GameState) {
    debug_assert!(
        GameInvariants::check_all(state).is_ok(),
        "game invariant violated"
    );
}

fn count_marks(state: &GameState, mark: Mark) -> usize {
    state
        .board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(mark))
        .count()
}

//! Tests for the inbound/outbound signal payloads and their dispatch.

use serde_json::json;
use solo_tictactoe::{
    Game, GameStatus, Mark, MoveRequest, Position, Request, StatusNotification,
};

#[test]
fn test_move_request_drives_the_engine() {
    let mut game = Game::with_seed(42);
    game.handle(Request::Move(MoveRequest::new(4)));

    assert!(!game.board().is_empty(Position::Center));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_out_of_range_request_changes_nothing() {
    let mut game = Game::with_seed(42);
    let before = game.state().clone();

    game.handle(Request::Move(MoveRequest::new(9)));
    game.handle(Request::Move(MoveRequest::new(200)));

    assert_eq!(game.state(), &before);
}

#[test]
fn test_reset_request_restarts_the_game() {
    let mut game = Game::with_seed(42);
    game.handle(Request::Move(MoveRequest::new(0)));
    assert!(!game.history().is_empty());

    game.handle(Request::Reset);
    assert!(game.history().is_empty());
    assert_eq!(game.status(), &GameStatus::InProgress);
}

#[test]
fn test_request_wire_shape() {
    let mov = Request::Move(MoveRequest::new(4));
    assert_eq!(
        serde_json::to_value(mov).unwrap(),
        json!({ "kind": "move", "position": 4 })
    );

    assert_eq!(
        serde_json::to_value(Request::Reset).unwrap(),
        json!({ "kind": "reset" })
    );
}

#[test]
fn test_request_round_trip() {
    let parsed: Request =
        serde_json::from_value(json!({ "kind": "move", "position": 7 })).unwrap();
    assert_eq!(parsed, Request::Move(MoveRequest::new(7)));

    let parsed: Request = serde_json::from_value(json!({ "kind": "reset" })).unwrap();
    assert_eq!(parsed, Request::Reset);
}

#[test]
fn test_notification_wire_shape() {
    let note = StatusNotification {
        status: GameStatus::InProgress,
    };
    assert_eq!(
        serde_json::to_value(&note).unwrap(),
        json!({ "status": "in_progress" })
    );

    let note = StatusNotification {
        status: GameStatus::Won(Mark::O),
    };
    assert_eq!(
        serde_json::to_value(&note).unwrap(),
        json!({ "status": { "won": "O" } })
    );

    let note = StatusNotification {
        status: GameStatus::Draw,
    };
    let value = serde_json::to_value(&note).unwrap();
    assert_eq!(value, json!({ "status": "draw" }));

    let back: StatusNotification = serde_json::from_value(value).unwrap();
    assert_eq!(back.status, GameStatus::Draw);
}

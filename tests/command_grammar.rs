//! Wire-compatibility checks for the inbound grammar, driven end-to-end
//! through a session so replies (not parser internals) are what is asserted.

use std::sync::{Arc, Mutex};

use tictacbot::bot::GameSession;

fn active_session() -> (GameSession, Arc<Mutex<Vec<String>>>) {
    let replies: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&replies);
    let mut session = GameSession::new(
        "grammar",
        Box::new(move |message| sink.lock().expect("sink lock").push(message)),
    );
    session.handle_message("start");
    (session, replies)
}

fn last(replies: &Arc<Mutex<Vec<String>>>) -> String {
    replies
        .lock()
        .expect("replies lock")
        .last()
        .cloned()
        .expect("no reply recorded")
}

#[test]
fn first_numeric_token_is_the_column() {
    let (mut session, replies) = active_session();
    session.handle_message("X 2 0");
    // Column 2, row 0: top-right corner.
    assert_eq!(last(&replies), "..X\n...\n...");
}

#[test]
fn second_numeric_token_is_the_row() {
    let (mut session, replies) = active_session();
    session.handle_message("O 0 2");
    // Column 0, row 2: bottom-left corner.
    assert_eq!(last(&replies), "...\n...\nO..");
}

#[test]
fn repeated_whitespace_between_tokens_is_accepted() {
    let (mut session, replies) = active_session();
    session.handle_message("X   1  \t 1");
    assert_eq!(last(&replies), "...\n.X.\n...");
}

#[test]
fn start_literal_is_case_sensitive_and_exact() {
    let (mut session, replies) = active_session();
    for message in ["START", "Start", "start ", " start", "restart"] {
        session.handle_message(message);
        assert_eq!(last(&replies), "Invalid turn", "{message:?} must not start");
    }
    assert!(session.is_active());
}

#[test]
fn lowercase_player_tokens_are_rejected() {
    let (mut session, replies) = active_session();
    session.handle_message("x 1 1");
    assert_eq!(last(&replies), "Invalid turn");
    session.handle_message("o 1 1");
    assert_eq!(last(&replies), "Invalid turn");
}

#[test]
fn coordinate_coercion_failures_are_uniformly_invalid() {
    // The broad catch: non-numeric, fractional, negative and overflowing
    // coordinates all collapse into the same user-visible error.
    let (mut session, replies) = active_session();
    for message in [
        "X one 1",
        "X 1.5 1",
        "X 1 -1",
        "X -1 1",
        "X 99999999999999999999 0",
        "X 1 1 extra",
    ] {
        session.handle_message(message);
        assert_eq!(last(&replies), "Invalid turn", "{message:?}");
    }
    // The session survives the volley and still takes a legal move.
    session.handle_message("X 1 1");
    assert_eq!(last(&replies), "...\n.X.\n...");
}

#[test]
fn in_range_boundary_coordinates_are_legal() {
    let (mut session, replies) = active_session();
    session.handle_message("X 0 0");
    assert_eq!(last(&replies), "X..\n...\n...");
    session.handle_message("O 2 2");
    assert_eq!(last(&replies), "X..\n...\n..O");
}

#[test]
fn just_out_of_range_coordinates_are_invalid() {
    let (mut session, replies) = active_session();
    session.handle_message("X 3 0");
    assert_eq!(last(&replies), "Invalid turn");
    session.handle_message("X 0 3");
    assert_eq!(last(&replies), "Invalid turn");
}

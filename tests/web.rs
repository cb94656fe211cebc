//! Session bindings exercised from JavaScript.
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use othello_engine::{OthelloSession, wasm_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn valid_moves_report_for_opening() {
    let session = OthelloSession::new();
    let report = session.valid_moves().ok().expect("report");

    assert_eq!(get(&report, "currentPlayer").as_string().as_deref(), Some("Black"));

    let moves = Array::from(&get(&report, "moves"));
    assert_eq!(moves.length(), 4);

    let first = moves.get(0);
    let position = get(&first, "position");
    assert_eq!(get(&position, "row").as_f64(), Some(2.0));
    assert_eq!(get(&position, "col").as_f64(), Some(3.0));
    assert_eq!(Array::from(&get(&first, "flippedPositions")).length(), 1);

    let statistics = get(&report, "statistics");
    assert_eq!(get(&statistics, "black").as_f64(), Some(2.0));
    assert_eq!(get(&statistics, "white").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn moves_by_coordinate_and_notation() {
    let mut session = OthelloSession::new();

    assert!(!session.try_apply_move(-1, 0));
    assert!(!session.try_apply_move(3, 3));
    assert!(session.try_apply_move(2, 3));
    assert_eq!(session.current_player(), "White");
    assert!(!session.try_apply_notation("Z1"));
    assert!(session.try_apply_notation("c3"));
    assert_eq!(session.current_player(), "Black");
}

#[wasm_bindgen_test]
fn load_rejects_malformed_board() {
    let mut session = OthelloSession::new();

    assert!(session.load("........", false).is_err());
    assert_eq!(
        session.board_text(),
        "........\n........\n........\n...WB...\n...BW...\n........\n........\n........"
    );
}

#[wasm_bindgen_test]
fn passes_end_the_game() {
    let mut session = OthelloSession::new();
    let loaded = session.load(
        ".BBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB",
        true,
    );
    assert!(loaded.is_ok());

    assert!(session.outcome().ok().expect("outcome").is_undefined());
    assert!(session.must_pass());
    assert!(session.pass().is_ok());
    assert!(session.pass().is_ok());

    assert!(session.is_game_over());
    assert!(session.pass().is_err());
    let outcome = session.outcome().ok().expect("outcome");
    assert_eq!(get(&outcome, "Winner").as_string().as_deref(), Some("Black"));
}

#[wasm_bindgen_test]
fn reset_and_show_board() {
    let mut session = OthelloSession::new();
    assert!(session.try_apply_notation("F5"));

    session.reset();

    let view = session.show_board();
    assert!(view.starts_with("   A B C D E F G H\n"));
    assert!(view.contains("4 │      ○ ●      │"));
}

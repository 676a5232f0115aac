#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use saada::MAX_SEEDS_PER_HOLE;
use saada::wasm::{
    SaadaGame, execute_move, get_best_move, get_legal_moves, initialize_board, setup_rematch,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn board(holes: [u32; 14]) -> JsValue {
    holes.iter().map(|&seeds| JsValue::from(seeds)).collect::<Array>().into()
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn execute_move_returns_trace_with_kind_tags() {
    let result = execute_move(
        board([0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 5, 0]),
        9,
        JsValue::from_str("CW"),
        JsValue::from_str("P2"),
        0,
    )
    .unwrap();

    assert_eq!(field(&result, "captured_seeds").as_f64(), Some(8.0));
    assert_eq!(field(&result, "turn_ended").as_bool(), Some(false));
    assert_eq!(field(&result, "next_player").as_string().as_deref(), Some("P2"));
    let events = Array::from(&field(&result, "events"));
    let last = events.get(events.length() - 1);
    assert_eq!(field(&last, "kind").as_string().as_deref(), Some("CAPTURE"));
}

#[wasm_bindgen_test]
fn empty_hole_is_thrown_as_error() {
    let result = execute_move(
        board([0; 14]),
        0,
        JsValue::from_str("ACW"),
        JsValue::from_str("P1"),
        0,
    );

    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn legal_moves_and_rematch_cross_the_boundary() {
    let holes = board([0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(get_legal_moves(holes, JsValue::from_str("P1")).unwrap(), vec![2, 6]);

    let scores = js_sys::Object::new();
    Reflect::set(&scores, &"p1".into(), &JsValue::from(10)).unwrap();
    Reflect::set(&scores, &"p2".into(), &JsValue::from(9)).unwrap();
    let setup = setup_rematch(scores.into()).unwrap();
    assert_eq!(field(&setup, "p1_remainder").as_f64(), Some(2.0));
    assert_eq!(field(&setup, "p2_remainder").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn initialize_board_rejects_oversized_fill() {
    let holes = Array::from(&initialize_board(MAX_SEEDS_PER_HOLE).unwrap());
    assert_eq!(holes.get(13).as_f64(), Some(f64::from(MAX_SEEDS_PER_HOLE)));

    assert!(initialize_board(400_000_000).is_err());
    assert!(initialize_board(0).is_err());
}

#[wasm_bindgen_test]
fn rematch_accepts_player_named_score_keys() {
    let scores = js_sys::Object::new();
    Reflect::set(&scores, &"P1".into(), &JsValue::from(10)).unwrap();
    Reflect::set(&scores, &"P2".into(), &JsValue::from(9)).unwrap();

    let setup = setup_rematch(scores.into()).unwrap();

    assert_eq!(field(&setup, "p1_remainder").as_f64(), Some(2.0));
    assert_eq!(field(&setup, "p2_remainder").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn best_move_accepts_numeric_difficulty() {
    let result = get_best_move(board([4; 14]), JsValue::from(0)).unwrap();

    assert!(!result.is_null());
}

#[wasm_bindgen_test]
fn best_move_is_null_without_seeds() {
    let result = get_best_move(
        board([4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0]),
        JsValue::from_str("HARD"),
    )
    .unwrap();

    assert!(result.is_null());
}

#[wasm_bindgen_test]
fn game_class_alternates_human_and_computer() {
    let mut game = SaadaGame::new(JsValue::UNDEFINED).unwrap();
    assert!(!game.is_computer_turn());
    assert_eq!(game.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);

    let result = game.sow(0, JsValue::from_str("CW")).unwrap();
    assert!(field(&result, "board").is_object());

    let state = game.state().unwrap();
    assert_eq!(field(&state, "status").as_string().as_deref(), Some("PLAYING"));
}

//! JavaScript bindings. Values cross the boundary as plain objects through `serde-wasm-bindgen`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::ai;
use crate::board::Board;
use crate::config::{GameConfig, validate_seeds_per_hole};
use crate::game::{GameInstance, clock_seed};
use crate::rules;
use crate::sowing;
use crate::types::{Difficulty, Direction, Player, ScorePair};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|err| JsError::new(&err.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| JsError::new(&err.to_string()))
}

fn to_indices(moves: Vec<usize>) -> Vec<u32> {
    moves.into_iter().map(|index| index as u32).collect()
}

#[wasm_bindgen(js_name = initializeBoard)]
pub fn initialize_board(seeds_per_hole: u32) -> Result<JsValue, JsError> {
    validate_seeds_per_hole(seeds_per_hole)?;
    to_js(&rules::initialize_board(seeds_per_hole))
}

/// `direction` is `"CW"` or `"ACW"`, `player` is `"P1"` or `"P2"`.
#[wasm_bindgen(js_name = executeMove)]
pub fn execute_move(
    board: JsValue,
    start: usize,
    direction: JsValue,
    player: JsValue,
    bonus_count: u32,
) -> Result<JsValue, JsError> {
    let board: Board = from_js(board)?;
    let direction: Direction = from_js(direction)?;
    let player: Player = from_js(player)?;
    let result = sowing::execute_move(&board, start, direction, player, bonus_count)?;
    to_js(&result)
}

#[wasm_bindgen(js_name = getLegalMoves)]
pub fn get_legal_moves(board: JsValue, player: JsValue) -> Result<Vec<u32>, JsError> {
    let board: Board = from_js(board)?;
    let player: Player = from_js(player)?;
    Ok(to_indices(rules::get_legal_moves(&board, player)))
}

#[wasm_bindgen(js_name = checkWin)]
pub fn check_win(board: JsValue, next_player: JsValue) -> Result<bool, JsError> {
    let board: Board = from_js(board)?;
    let next_player: Player = from_js(next_player)?;
    Ok(rules::check_win(&board, next_player))
}

#[wasm_bindgen(js_name = setupRematch)]
pub fn setup_rematch(scores: JsValue) -> Result<JsValue, JsError> {
    let scores: ScorePair = from_js(scores)?;
    to_js(&rules::setup_rematch(&scores))
}

/// Returns `null` when Player 2 has nothing to sow. Unknown difficulty names play as `"MEDIUM"`.
#[wasm_bindgen(js_name = getBestMove)]
pub fn get_best_move(board: JsValue, difficulty: JsValue) -> Result<JsValue, JsError> {
    let board: Board = from_js(board)?;
    let difficulty = if difficulty.is_undefined() || difficulty.is_null() {
        Difficulty::default()
    } else {
        from_js(difficulty)?
    };
    let mut rng = ChaCha8Rng::seed_from_u64(clock_seed());
    to_js(&ai::get_best_move(&board, difficulty, &mut rng))
}

/// A whole game with scores, turn order and the bonus-turn counter kept on the Rust side.
#[wasm_bindgen]
pub struct SaadaGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl SaadaGame {
    /// `config` may be `undefined` or any subset of
    /// `{ seeds_per_hole, mode: "PVC" | "PVP", difficulty, ai_seed }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SaadaGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            from_js(config)?
        };
        Ok(Self {
            inner: GameInstance::new_with_default_selector(config)?,
        })
    }

    /// Plays a human move and returns its move result, including the event trace.
    pub fn sow(&mut self, index: usize, direction: JsValue) -> Result<JsValue, JsError> {
        let direction: Direction = from_js(direction)?;
        let result = self.inner.sow(index, direction)?;
        to_js(&result)
    }

    /// Plays the computer's move. Returns `null` if it had none and the game ended.
    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsError> {
        let result = self.inner.do_ai_move()?;
        to_js(&result)
    }

    pub fn rematch(&mut self) -> Result<(), JsError> {
        self.inner.rematch()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.inner.is_computer_turn()
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Vec<u32> {
        to_indices(self.inner.get_legal_moves())
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }
}

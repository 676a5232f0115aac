use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod sowing;
pub mod types;
pub mod wasm;

pub use ai::get_best_move;
pub use board::{Board, MAX_BOARD_SEEDS, MAX_SEEDS_PER_HOLE};
pub use config::GameConfig;
pub use error::{GameError, MoveError};
pub use game::GameInstance;
pub use rules::{check_win, get_legal_moves, has_legal_moves, initialize_board, setup_rematch};
pub use sowing::execute_move;
pub use types::{Difficulty, Direction, MoveRequest, MoveResult, Player, ScorePair, SowEvent};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

pub mod heuristic;
pub mod search;

pub use search::{AI_PLAYER, Searcher, get_best_move};

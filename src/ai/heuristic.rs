use crate::board::Board;
use crate::sowing::execute_move;
use crate::types::{MoveRequest, Player};

/// Score given to a candidate the engine refuses to play.
pub const REJECTED_MOVE_SCORE: f64 = -1000.0;
const CAPTURE_WEIGHT: f64 = 10.0;
const EXTRA_TURN_BONUS: f64 = 20.0;

/// One-ply score of `request` for `player`: ten per captured seed, plus a flat bonus
/// when the move keeps the turn.
///
/// Simulates with no bonus turn used yet, whatever the real turn sequence holds.
pub fn evaluate(board: &Board, request: MoveRequest, player: Player) -> f64 {
    match execute_move(board, request.index, request.direction, player, 0) {
        Ok(result) => {
            let mut score = f64::from(result.captured_seeds) * CAPTURE_WEIGHT;
            if !result.turn_ended {
                score += EXTRA_TURN_BONUS;
            }
            score
        }
        Err(err) => {
            log::debug!("rejected candidate {request:?}: {err}");
            REJECTED_MOVE_SCORE
        }
    }
}

use rand::Rng;
use rand::seq::SliceRandom;

use crate::ai::heuristic::evaluate;
use crate::board::Board;
use crate::types::{Difficulty, Direction, MoveRequest, Player};

/// The seat the computer plays.
pub const AI_PLAYER: Player = Player::P2;

/// Picks a move for [`AI_PLAYER`] according to a difficulty policy.
pub struct Searcher<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    difficulty: Difficulty,
}

impl<'a, R: Rng + ?Sized> Searcher<'a, R> {
    pub fn new(rng: &'a mut R, difficulty: Difficulty) -> Self {
        Self { rng, difficulty }
    }

    /// Returns `None` only when the computer has no seeds to sow.
    pub fn search(&mut self, board: &Board) -> Option<MoveRequest> {
        let moves = board.legal_moves(AI_PLAYER);
        if moves.is_empty() {
            return None;
        }

        let selected = match self.difficulty {
            Difficulty::Easy => self.random_move(&moves),
            // No deeper search exists; Hard plays the greedy policy.
            Difficulty::Medium | Difficulty::Hard => self.greedy_move(board, &moves),
        };

        log::debug!("{:?} AI selected {selected:?}", self.difficulty);
        Some(selected)
    }

    fn random_move(&mut self, moves: &[usize]) -> MoveRequest {
        let index = moves.choose(&mut *self.rng).copied().unwrap_or(moves[0]);
        let direction = if self.rng.gen_bool(0.5) {
            Direction::Clockwise
        } else {
            Direction::AntiClockwise
        };
        MoveRequest { index, direction }
    }

    fn greedy_move(&mut self, board: &Board, moves: &[usize]) -> MoveRequest {
        let mut best_move = MoveRequest {
            index: moves[0],
            direction: Direction::Clockwise,
        };
        let mut best_score = f64::NEG_INFINITY;

        for &index in moves {
            for direction in Direction::ALL {
                let candidate = MoveRequest { index, direction };
                // Jitter in [0, 1) only reorders candidates with equal scores.
                let score = evaluate(board, candidate, AI_PLAYER) + self.rng.r#gen::<f64>();
                if score > best_score {
                    best_score = score;
                    best_move = candidate;
                }
            }
        }

        best_move
    }
}

/// Convenience wrapper around [`Searcher`].
pub fn get_best_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<MoveRequest> {
    Searcher::new(rng, difficulty).search(board)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const CAPTURE_BOARD: [u32; 14] = [0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 5, 0];

    #[test]
    fn search_returns_none_without_seeds_on_ai_side() {
        let board = Board::from_array([4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0]);

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            assert_eq!(get_best_move(&board, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn medium_prefers_capture_with_extra_turn() {
        let board = Board::from_array(CAPTURE_BOARD);

        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(
                get_best_move(&board, Difficulty::Medium, &mut rng),
                Some(MoveRequest {
                    index: 9,
                    direction: Direction::Clockwise,
                })
            );
        }
    }

    #[test]
    fn hard_plays_exactly_like_medium() {
        let board = Board::default();

        for seed in 0..16 {
            let mut medium_rng = ChaCha8Rng::seed_from_u64(seed);
            let mut hard_rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(
                get_best_move(&board, Difficulty::Medium, &mut medium_rng),
                get_best_move(&board, Difficulty::Hard, &mut hard_rng)
            );
        }
    }

    #[test]
    fn easy_only_picks_legal_holes() {
        let board = Board::from_array([4, 4, 4, 4, 4, 4, 4, 0, 2, 0, 0, 1, 0, 0]);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let mv = get_best_move(&board, Difficulty::Easy, &mut rng).unwrap();
            assert!(mv.index == 8 || mv.index == 11);
            seen.insert((mv.index, mv.direction));
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn tie_break_varies_between_equal_candidates() {
        // Every candidate is a quiet move scoring zero.
        let board = Board::from_array([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0]);
        let mut chosen = HashSet::new();

        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mv = get_best_move(&board, Difficulty::Medium, &mut rng).unwrap();
            chosen.insert((mv.index, mv.direction));
        }

        assert!(chosen.len() > 1);
    }
}

use crate::board::{Board, player_range};
use crate::types::{Player, RematchSetup, ScorePair};

/// Seeds placed in each refilled hole at a rematch.
pub const REMATCH_SEEDS_PER_HOLE: u32 = 4;

pub fn initialize_board(seeds_per_hole: u32) -> Board {
    Board::new(seeds_per_hole)
}

pub fn get_legal_moves(board: &Board, player: Player) -> Vec<usize> {
    board.legal_moves(player)
}

pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    board.has_legal_moves(player)
}

/// Returns `true` when the game is over: the player due to move next cannot sow,
/// or the board is empty.
pub fn check_win(board: &Board, next_player: Player) -> bool {
    !board.has_legal_moves(next_player) || board.total() == 0
}

/// Banks each side's remaining seeds into its own score and clears the board.
pub fn sweep(board: &mut Board, scores: &mut ScorePair) {
    for player in [Player::P1, Player::P2] {
        let mut swept = 0;
        for index in player_range(player) {
            swept += board.take(index);
        }
        scores.add(player, swept);
    }
}

/// Refills each side's holes in ascending order, four seeds per hole, from that side's score.
/// Whatever cannot fill a whole hole is handed back as a remainder.
pub fn setup_rematch(scores: &ScorePair) -> RematchSetup {
    let mut board = Board::empty();
    let p1_remainder = refill(&mut board, Player::P1, scores.p1);
    let p2_remainder = refill(&mut board, Player::P2, scores.p2);

    RematchSetup {
        board,
        p1_remainder,
        p2_remainder,
    }
}

fn refill(board: &mut Board, player: Player, mut banked: u32) -> u32 {
    for index in player_range(player) {
        if banked < REMATCH_SEEDS_PER_HOLE {
            break;
        }
        board.set(index, REMATCH_SEEDS_PER_HOLE);
        banked -= REMATCH_SEEDS_PER_HOLE;
    }
    banked
}

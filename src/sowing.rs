//! Relay sowing and capture resolution for a single move.

use std::collections::HashSet;

use crate::board::{Board, MAX_BOARD_SEEDS, NUM_HOLES, mirror, step};
use crate::error::MoveError;
use crate::types::{Direction, MoveResult, Player, SowEvent};

/// Bonus turns allowed per turn sequence.
pub const MAX_BONUS_TURNS: u32 = 1;

/// Plays `start` in `direction` for `player` on a copy of `board`.
///
/// Sowing relays: when the last seed lands and the next hole holds seeds, those are picked
/// up and sowing goes on from there. When the next hole is empty the move resolves against
/// the hole after it and that hole's mirror, which may belong to either side.
///
/// `bonus_count` is the number of bonus turns already granted in this turn sequence.
///
/// Boards met in normal play resolve, but an arbitrary board can relay around the same
/// positions forever. That is reported as
/// [`MoveError::EndlessRelay`] instead of looping.
pub fn execute_move(
    board: &Board,
    start: usize,
    direction: Direction,
    player: Player,
    bonus_count: u32,
) -> Result<MoveResult, MoveError> {
    if start >= NUM_HOLES {
        return Err(MoveError::OutOfRange { index: start });
    }
    if board[start] == 0 {
        return Err(MoveError::EmptyHole { index: start });
    }
    let total = board.total();
    if total > MAX_BOARD_SEEDS {
        return Err(MoveError::TooManySeeds {
            total,
            max: MAX_BOARD_SEEDS,
        });
    }

    let mut next = *board;
    let mut events = Vec::new();
    let mut hand = next.take(start);
    let mut current = start;
    let mut relays = HashSet::new();
    events.push(SowEvent::PickUp { index: start });

    loop {
        while hand > 0 {
            current = step(current, direction);
            next.drop_seed(current);
            hand -= 1;
            events.push(SowEvent::Drop { index: current });
        }

        let relay = step(current, direction);
        if next[relay] == 0 {
            break;
        }
        if !relays.insert((next, relay)) {
            return Err(MoveError::EndlessRelay { start });
        }
        hand = next.take(relay);
        current = relay;
        events.push(SowEvent::PickUp { index: relay });
    }

    let target = step(step(current, direction), direction);
    let opposite = mirror(target);
    let captured_seeds = next[target] + next[opposite];
    if captured_seeds > 0 {
        next.take(target);
        next.take(opposite);
        events.push(SowEvent::Capture {
            indices: [target, opposite],
        });
    } else {
        events.push(SowEvent::Stop { index: current });
    }

    let can_continue = captured_seeds > 0 && bonus_count < MAX_BONUS_TURNS;
    let next_player = if can_continue { player } else { player.opponent() };

    log::debug!(
        "{player:?} sowed {start} {direction:?}: ended at {current}, captured {captured_seeds}, next {next_player:?}"
    );

    Ok(MoveResult {
        board: next,
        captured_seeds,
        ended_index: current,
        events,
        turn_ended: !can_continue,
        bonus_triggered: true,
        next_player,
    })
}

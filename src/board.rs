use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Player};

pub const NUM_HOLES: usize = 14;
pub const HOLES_PER_PLAYER: usize = NUM_HOLES / 2;
pub const DEFAULT_SEEDS_PER_HOLE: u32 = 4;
/// Largest uniform fill a game may start with.
pub const MAX_SEEDS_PER_HOLE: u32 = 10_000;
/// Most seeds the engine will sow on one board. Keeps hole counts and traces small.
pub const MAX_BOARD_SEEDS: u64 = MAX_SEEDS_PER_HOLE as u64 * NUM_HOLES as u64;
const PLAYER_1_HOLES: Range<usize> = 0..HOLES_PER_PLAYER;
const PLAYER_2_HOLES: Range<usize> = HOLES_PER_PLAYER..NUM_HOLES;

/// Seed counts of the 14 holes on the ring.
///
/// The board is a plain value: moves build a new one instead of editing in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    holes: [u32; NUM_HOLES],
}

impl Board {
    /// Creates a board with `seeds_per_hole` seeds in every hole.
    pub fn new(seeds_per_hole: u32) -> Self {
        Self {
            holes: [seeds_per_hole; NUM_HOLES],
        }
    }

    pub fn empty() -> Self {
        Self::new(0)
    }

    pub fn from_array(holes: [u32; NUM_HOLES]) -> Self {
        Self { holes }
    }

    pub fn to_array(&self) -> [u32; NUM_HOLES] {
        self.holes
    }

    /// Empties the hole and returns what it held.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.holes[index])
    }

    pub(crate) fn drop_seed(&mut self, index: usize) {
        self.holes[index] += 1;
    }

    pub(crate) fn set(&mut self, index: usize, seeds: u32) {
        self.holes[index] = seeds;
    }

    /// Returns the total number of seeds on the board.
    pub fn total(&self) -> u64 {
        self.holes.iter().map(|&seeds| u64::from(seeds)).sum()
    }

    /// Returns the number of seeds in the player's own holes.
    pub fn side_total(&self, player: Player) -> u64 {
        self.holes[player_range(player)]
            .iter()
            .map(|&seeds| u64::from(seeds))
            .sum()
    }

    /// Returns the player's non-empty holes in ascending order.
    pub fn legal_moves(&self, player: Player) -> Vec<usize> {
        player_range(player)
            .filter(|&index| self.holes[index] > 0)
            .collect()
    }

    pub fn has_legal_moves(&self, player: Player) -> bool {
        player_range(player).any(|index| self.holes[index] > 0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SEEDS_PER_HOLE)
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.holes[index]
    }
}

/// Holes owned by `player`.
pub fn player_range(player: Player) -> Range<usize> {
    match player {
        Player::P1 => PLAYER_1_HOLES,
        Player::P2 => PLAYER_2_HOLES,
    }
}

pub fn owns_hole(player: Player, index: usize) -> bool {
    player_range(player).contains(&index)
}

/// Next hole around the ring.
pub fn step(index: usize, direction: Direction) -> usize {
    match direction {
        Direction::Clockwise => (index + 1) % NUM_HOLES,
        Direction::AntiClockwise => (index + NUM_HOLES - 1) % NUM_HOLES,
    }
}

/// Hole facing `index` across the board. Ownership plays no part.
pub fn mirror(index: usize) -> usize {
    NUM_HOLES - 1 - index
}

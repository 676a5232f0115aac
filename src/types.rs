use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::board::Board;

/// One of the two seats. Player 1 owns holes 0..=6, Player 2 owns holes 7..=13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

/// Sense of travel around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards higher indices, 13 wraps to 0.
    #[serde(rename = "CW")]
    Clockwise,
    /// Towards lower indices, 0 wraps to 13.
    #[serde(rename = "ACW")]
    AntiClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::AntiClockwise];
}

/// AI strength. `Hard` is accepted but plays exactly like `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Maps a numeric level from the frontend. Unknown levels play as `Medium`.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Easy,
            1 => Self::Medium,
            2 => Self::Hard,
            _ => Self::Medium,
        }
    }

    fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "EASY" => Self::Easy,
            "HARD" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

/// Accepts a name (`"EASY"`, case-insensitive) or a numeric level (`0`, `1`, `2`).
impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DifficultyVisitor)
    }
}

struct DifficultyVisitor;

impl Visitor<'_> for DifficultyVisitor {
    type Value = Difficulty;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a difficulty name or level")
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<Difficulty, E> {
        Ok(Difficulty::from_name(name))
    }

    fn visit_u64<E: de::Error>(self, level: u64) -> Result<Difficulty, E> {
        Ok(u8::try_from(level).map_or(Difficulty::Medium, Difficulty::from_level))
    }

    fn visit_i64<E: de::Error>(self, level: i64) -> Result<Difficulty, E> {
        Ok(u8::try_from(level).map_or(Difficulty::Medium, Difficulty::from_level))
    }

    // JS numbers arrive as f64.
    fn visit_f64<E: de::Error>(self, level: f64) -> Result<Difficulty, E> {
        if level.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&level) {
            Ok(Difficulty::from_level(level as u8))
        } else {
            Ok(Difficulty::Medium)
        }
    }
}

/// A start hole plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub index: usize,
    pub direction: Direction,
}

/// One step of a move, in the order it happened.
///
/// Replaying the trace on the input board reproduces the result board:
/// `PickUp` empties a hole, `Drop` adds one seed, `Capture` empties both listed holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SowEvent {
    PickUp { index: usize },
    Drop { index: usize },
    Capture { indices: [usize; 2] },
    Stop { index: usize },
}

/// Outcome of [`crate::sowing::execute_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub board: Board,
    pub captured_seeds: u32,
    /// Hole where the last seed was dropped.
    pub ended_index: usize,
    pub events: Vec<SowEvent>,
    pub turn_ended: bool,
    /// Contract:
    /// - `true` whenever sowing reached the capture check, captured or not.
    /// - Does not mean a bonus turn was granted; see `turn_ended`.
    pub bonus_triggered: bool,
    pub next_player: Player,
}

/// Banked seeds per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScorePair {
    #[serde(alias = "P1")]
    pub p1: u32,
    #[serde(alias = "P2")]
    pub p2: u32,
}

impl ScorePair {
    pub fn new(p1: u32, p2: u32) -> Self {
        Self { p1, p2 }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        }
    }

    pub fn add(&mut self, player: Player, seeds: u32) {
        let score = match player {
            Player::P1 => &mut self.p1,
            Player::P2 => &mut self.p2,
        };
        *score = score.saturating_add(seeds);
    }

    pub fn total(&self) -> u64 {
        u64::from(self.p1) + u64::from(self.p2)
    }
}

/// Board for the next round plus the banked seeds that did not fill a whole hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RematchSetup {
    pub board: Board,
    pub p1_remainder: u32,
    pub p2_remainder: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    #[default]
    Playing,
    Ended,
}

/// Who sits in the Player 2 seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Player 2 is the computer.
    #[default]
    #[serde(rename = "PVC")]
    PlayerVsComputer,
    #[serde(rename = "PVP")]
    PlayerVsPlayer,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub scores: ScorePair,
    pub status: GameStatus,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Bonus turns already granted in the current turn sequence.
    pub bonus_count: u32,
    pub last_sown_index: Option<usize>,
    /// Trace of the previous move, empty before the first move of a round.
    pub events: Vec<SowEvent>,
}

/// Final result after game over. `winner` is `None` on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub scores: ScorePair,
}

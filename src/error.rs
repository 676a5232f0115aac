use thiserror::Error;

use crate::types::Player;

/// Errors raised by [`crate::sowing::execute_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot sow from empty hole {index}")]
    EmptyHole { index: usize },
    #[error("sowing from hole {start} relays forever")]
    EndlessRelay { start: usize },
    #[error("hole index {index} is out of range")]
    OutOfRange { index: usize },
    #[error("board holds {total} seeds, more than the {max} that can be sown")]
    TooManySeeds { total: u64, max: u64 },
}

/// Errors raised by [`crate::game::GameInstance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("game is still in progress")]
    GameInProgress,
    #[error("it is not the player's turn")]
    NotPlayersTurn,
    #[error("it is not AI's turn")]
    NotAiTurn,
    #[error("hole {index} does not belong to {player:?}")]
    NotOwnHole { index: usize, player: Player },
    #[error("AI selected an illegal move: hole {index}")]
    IllegalAiMove { index: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Move(#[from] MoveError),
}

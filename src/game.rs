use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::ai::{AI_PLAYER, get_best_move};
use crate::board::{Board, NUM_HOLES, owns_hole};
use crate::config::GameConfig;
use crate::error::{GameError, MoveError};
use crate::rules::{check_win, setup_rematch, sweep};
use crate::sowing::execute_move;
use crate::types::{
    Difficulty, Direction, GameMode, GameResult, GameState, GameStatus, MoveRequest, MoveResult,
    Player, ScorePair, SowEvent,
};

pub trait MoveSelector: Send {
    fn select_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<MoveRequest>;
}

/// Plays the difficulty policy from [`crate::ai`] with its own seeded RNG.
#[derive(Debug, Clone)]
pub struct DifficultySelector {
    rng: ChaCha8Rng,
}

impl DifficultySelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for DifficultySelector {
    fn select_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<MoveRequest> {
        get_best_move(board, difficulty, &mut self.rng)
    }
}

pub struct GameInstance {
    board: Board,
    scores: ScorePair,
    pub current_player: Player,
    /// Bonus turns granted so far in the current player's turn sequence.
    pub bonus_count: u32,
    pub status: GameStatus,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_sown_index: Option<usize>,
    pub events: Vec<SowEvent>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(config: GameConfig, selector: Box<dyn MoveSelector>) -> Result<Self, GameError> {
        config.validate()?;
        log::info!(
            "new {:?} game, {} seeds per hole, {:?}",
            config.mode,
            config.seeds_per_hole,
            config.difficulty
        );

        Ok(Self {
            board: Board::new(config.seeds_per_hole),
            scores: ScorePair::default(),
            current_player: Player::P1,
            bonus_count: 0,
            status: GameStatus::Playing,
            mode: config.mode,
            difficulty: config.difficulty,
            last_sown_index: None,
            events: Vec::new(),
            selector,
        })
    }

    pub fn new_with_default_selector(config: GameConfig) -> Result<Self, GameError> {
        let seed = config.ai_seed.unwrap_or_else(clock_seed);
        Self::new(config, Box::new(DifficultySelector::new(seed)))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> ScorePair {
        self.scores
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Sows for the human whose turn it is. In a game against the computer only Player 1 is human.
    pub fn sow(&mut self, index: usize, direction: Direction) -> Result<MoveResult, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(GameError::NotPlayersTurn);
        }
        if index >= NUM_HOLES {
            return Err(MoveError::OutOfRange { index }.into());
        }
        if !owns_hole(self.current_player, index) {
            return Err(GameError::NotOwnHole {
                index,
                player: self.current_player,
            });
        }

        self.apply_move(index, direction)
    }

    /// Lets the computer play Player 2's move.
    ///
    /// Returns `Ok(None)` when the computer has nothing to sow; the game is then ended.
    pub fn do_ai_move(&mut self) -> Result<Option<MoveResult>, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotAiTurn);
        }

        let Some(selected) = self.selector.select_move(&self.board, self.difficulty) else {
            log::info!("AI has no legal moves");
            self.finish();
            return Ok(None);
        };

        if !owns_hole(AI_PLAYER, selected.index) || self.board[selected.index] == 0 {
            return Err(GameError::IllegalAiMove {
                index: selected.index,
            });
        }

        self.apply_move(selected.index, selected.direction).map(Some)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer && self.current_player == AI_PLAYER
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_legal_moves(self.current_player)
    }

    pub fn get_legal_moves(&self) -> Vec<usize> {
        self.board.legal_moves(self.current_player)
    }

    /// Starts the next round from the banked scores. Only allowed once the game has ended.
    pub fn rematch(&mut self) -> Result<(), GameError> {
        if !self.is_game_over() {
            return Err(GameError::GameInProgress);
        }

        let setup = setup_rematch(&self.scores);
        self.board = setup.board;
        self.scores = ScorePair::new(setup.p1_remainder, setup.p2_remainder);
        self.current_player = Player::P1;
        self.bonus_count = 0;
        self.status = GameStatus::Playing;
        self.last_sown_index = None;
        self.events.clear();
        log::info!(
            "rematch: {} seeds on board, carried {:?}",
            self.board.total(),
            self.scores
        );

        if check_win(&self.board, self.current_player) {
            self.finish();
        }
        Ok(())
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board,
            current_player: self.current_player,
            scores: self.scores,
            status: self.status,
            mode: self.mode,
            difficulty: self.difficulty,
            bonus_count: self.bonus_count,
            last_sown_index: self.last_sown_index,
            events: self.events.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let winner = if self.scores.p1 > self.scores.p2 {
            Some(Player::P1)
        } else if self.scores.p2 > self.scores.p1 {
            Some(Player::P2)
        } else {
            None
        };
        GameResult {
            winner,
            scores: self.scores,
        }
    }

    fn apply_move(&mut self, index: usize, direction: Direction) -> Result<MoveResult, GameError> {
        let result = execute_move(
            &self.board,
            index,
            direction,
            self.current_player,
            self.bonus_count,
        )?;

        // Everything below is derived first and then stored together.
        let mut board = result.board;
        let mut scores = self.scores;
        scores.add(self.current_player, result.captured_seeds);
        let bonus_count = if result.turn_ended {
            0
        } else {
            self.bonus_count + 1
        };
        let ended = check_win(&board, result.next_player);
        if ended {
            sweep(&mut board, &mut scores);
        }

        self.board = board;
        self.scores = scores;
        self.bonus_count = bonus_count;
        self.current_player = result.next_player;
        self.last_sown_index = Some(result.ended_index);
        self.events = result.events.clone();
        if ended {
            self.status = GameStatus::Ended;
            log::info!("game over: {:?}", self.scores);
        }

        Ok(result)
    }

    fn finish(&mut self) {
        sweep(&mut self.board, &mut self.scores);
        self.status = GameStatus::Ended;
        log::info!("game over: {:?}", self.scores);
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player, bonus_count: u32) {
        self.board = board;
        self.current_player = current_player;
        self.bonus_count = bonus_count;
        self.status = GameStatus::Playing;
        self.events.clear();
    }
}

/// Wall-clock seed for AI randomness; `web-time` keeps this working on wasm32.
pub(crate) fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

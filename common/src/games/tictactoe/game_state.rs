use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT};
use super::bot_controller::{calculate_move, BotInput};
use super::settings::DifficultySettings;
use super::types::{Difficulty, GameOutcome, GameStatus, Mark, WinningLine};
use super::win_detector::evaluate_board;

/// X always opens.
pub const FIRST_MARK: Mark = Mark::X;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    difficulty: Difficulty,
    status: GameStatus,
    is_player_turn: bool,
    outcome: Option<GameOutcome>,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            difficulty,
            status: GameStatus::Selecting,
            is_player_turn: true,
            outcome: None,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::Playing && !self.is_player_turn
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn set_human_mark(&mut self, mark: Mark) -> Result<(), String> {
        self.ensure_selecting()?;
        self.human_mark = mark;
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), String> {
        self.ensure_selecting()?;
        self.difficulty = difficulty;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), String> {
        self.ensure_selecting()?;
        self.status = GameStatus::Playing;
        self.is_player_turn = self.human_mark == FIRST_MARK;
        Ok(())
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::Playing {
            return Err("Game is not in progress".to_string());
        }
        if !self.is_player_turn {
            return Err("Not your turn".to_string());
        }
        self.place(index, self.human_mark)?;

        if self.status == GameStatus::Playing {
            self.is_player_turn = false;
        }
        Ok(())
    }

    /// Plays the computer's reply and returns the chosen cell.
    pub fn play_computer_move(
        &mut self,
        settings: &DifficultySettings,
        rng: &mut SessionRng,
    ) -> Result<usize, String> {
        if !self.is_computer_turn() {
            return Err("Not the computer's turn".to_string());
        }
        let input = BotInput::from_game_state(self);
        let index = calculate_move(self.difficulty, &input, settings, rng)
            .ok_or_else(|| "No empty cell left for the computer".to_string())?;
        self.place(index, self.computer_mark())?;

        if self.status == GameStatus::Playing {
            self.is_player_turn = true;
        }
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::Selecting;
        self.is_player_turn = true;
        self.outcome = None;
        self.winning_line = None;
        self.last_move = None;
    }

    fn ensure_selecting(&self) -> Result<(), String> {
        if self.status != GameStatus::Selecting {
            return Err("Settings can only change before the game starts".to_string());
        }
        Ok(())
    }

    fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }
        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.check_game_over();
        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(result) = evaluate_board(&self.board) {
            self.outcome = Some(GameOutcome::Winner(result.winner));
            self.winning_line = Some(result.line);
            self.end();
            return;
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            self.end();
        }
    }

    fn end(&mut self) {
        self.status = GameStatus::Ended;
        self.is_player_turn = false;
    }
}

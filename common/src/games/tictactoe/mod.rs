mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::{get_available_moves, Board, BOARD_SIZE, CELL_COUNT};
pub use bot_controller::{calculate_impossible_move, calculate_move, select_computer_move, BotInput};
pub use game_state::{TicTacToeGameState, FIRST_MARK};
pub use minimax::{find_best_move, find_near_best_moves, minimax, score_root_moves, MinimaxConfig};
pub use settings::{
    DifficultySettings, DEFAULT_HARD_MAX_DEPTH, DEFAULT_HARD_MISTAKE_PROBABILITY,
    DEFAULT_MEDIUM_SMART_MOVE_PROBABILITY, DEFAULT_SCORE_TOLERANCE,
};
pub use types::{Difficulty, GameOutcome, GameStatus, LineKind, Mark, WinResult, WinningLine};
pub use win_detector::{evaluate_board, is_draw, is_full, LINES};

pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{
    evaluate_board, select_computer_move, Board, Difficulty, Mark, WinResult,
};

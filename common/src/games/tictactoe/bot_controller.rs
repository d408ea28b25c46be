use crate::games::SessionRng;
use super::board::{get_available_moves, Board};
use super::game_state::TicTacToeGameState;
use super::minimax::{find_best_move, find_near_best_moves, MinimaxConfig};
use super::settings::DifficultySettings;
use super::types::{Difficulty, Mark};

pub struct BotInput {
    pub board: Board,
    pub computer_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            computer_mark: state.computer_mark(),
        }
    }
}

/// Picks the computer's next cell. Returns `None` only when the board has no
/// empty cell; callers are expected to check for a finished game first.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    settings: &DifficultySettings,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_medium_move(input, settings, rng),
        Difficulty::Hard => calculate_hard_move(input, settings, rng),
        Difficulty::Impossible => calculate_impossible_move(input),
    }
}

pub fn select_computer_move(
    board: &Board,
    computer_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    let input = BotInput {
        board: *board,
        computer_mark,
    };
    calculate_move(difficulty, &input, &DifficultySettings::default(), rng)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&get_available_moves(board))
}

fn calculate_medium_move(
    input: &BotInput,
    settings: &DifficultySettings,
    rng: &mut SessionRng,
) -> Option<usize> {
    if rng.chance(settings.medium_smart_move_probability) {
        calculate_hard_move(input, settings, rng)
    } else {
        calculate_random_move(&input.board, rng)
    }
}

fn calculate_hard_move(
    input: &BotInput,
    settings: &DifficultySettings,
    rng: &mut SessionRng,
) -> Option<usize> {
    if rng.chance(settings.hard_mistake_probability) {
        return calculate_random_move(&input.board, rng);
    }

    let config = MinimaxConfig::bounded(input.computer_mark, settings.hard_max_depth);
    let candidates = find_near_best_moves(&input.board, &config, settings.score_tolerance);
    rng.choose(&candidates)
}

pub fn calculate_impossible_move(input: &BotInput) -> Option<usize> {
    find_best_move(&input.board, &MinimaxConfig::unbounded(input.computer_mark))
}

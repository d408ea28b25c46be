use super::board::{get_available_moves, Board};
use super::types::Mark;
use super::win_detector::evaluate_board;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxConfig {
    pub player: Mark,
    pub opponent: Mark,
    /// `None` searches to the end of the game.
    pub max_depth: Option<usize>,
}

impl MinimaxConfig {
    pub fn unbounded(player: Mark) -> Self {
        Self {
            player,
            opponent: player.opponent(),
            max_depth: None,
        }
    }

    pub fn bounded(player: Mark, max_depth: usize) -> Self {
        Self {
            player,
            opponent: player.opponent(),
            max_depth: Some(max_depth),
        }
    }
}

fn terminal_score(board: &Board, depth: usize, config: &MinimaxConfig) -> Option<i32> {
    let depth = depth as i32;
    if let Some(result) = evaluate_board(board) {
        return Some(if result.winner == config.player {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        });
    }
    if board.is_full() {
        return Some(0);
    }
    None
}

pub fn minimax(board: &Board, depth: usize, is_maximizing: bool, config: &MinimaxConfig) -> i32 {
    if let Some(score) = terminal_score(board, depth, config) {
        return score;
    }
    if config.max_depth.is_some_and(|max_depth| depth >= max_depth) {
        return 0;
    }

    let mover = if is_maximizing {
        config.player
    } else {
        config.opponent
    };
    let scores = get_available_moves(board)
        .into_iter()
        .map(|index| minimax(&board.with_mark(index, mover), depth + 1, !is_maximizing, config));

    // A non-terminal board always has an empty cell.
    if is_maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

/// Score of every root move, in scan order. The reply after each root move
/// belongs to the opponent, so children start minimizing at depth 0.
pub fn score_root_moves(board: &Board, config: &MinimaxConfig) -> Vec<(usize, i32)> {
    get_available_moves(board)
        .into_iter()
        .map(|index| {
            let next = board.with_mark(index, config.player);
            (index, minimax(&next, 0, false, config))
        })
        .collect()
}

/// First cell in scan order reaching the maximum score.
pub fn find_best_move(board: &Board, config: &MinimaxConfig) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in score_root_moves(board, config) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Every root move scoring the best, or less than `tolerance` below it.
pub fn find_near_best_moves(board: &Board, config: &MinimaxConfig, tolerance: f64) -> Vec<usize> {
    let scored = score_root_moves(board, config);
    let Some(best_score) = scored.iter().map(|&(_, score)| score).max() else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|&(_, score)| score == best_score || f64::from(best_score - score) < tolerance)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;

    #[test]
    fn test_immediate_win_scores_ten() {
        let board = board_from_str("XX. .O. O..");
        let scores = score_root_moves(&board, &MinimaxConfig::unbounded(Mark::X));
        assert!(scores.contains(&(2, WIN_SCORE)));
    }

    #[test]
    fn test_loss_is_scored_from_opponent_reply() {
        // X ignores O's threat on the middle column; O wins on the next ply.
        let board = board_from_str("XO. .O. X..");
        let config = MinimaxConfig::unbounded(Mark::X);
        let next = board.with_mark(2, Mark::X);
        assert_eq!(minimax(&next, 0, false, &config), -WIN_SCORE + 1);
    }

    #[test]
    fn test_full_board_scores_zero() {
        let board = board_from_str("XOX XOO OXX");
        assert_eq!(minimax(&board, 3, true, &MinimaxConfig::unbounded(Mark::O)), 0);
    }

    #[test]
    fn test_depth_cap_is_neutral() {
        let board = Board::new().with_mark(0, Mark::X);
        let config = MinimaxConfig::bounded(Mark::O, 0);
        assert_eq!(minimax(&board, 0, true, &config), 0);
    }

    #[test]
    fn test_depth_three_cannot_see_the_corner_trap() {
        // X opened in the corner. Only the centre reply holds, but the forced
        // loss after any other reply lands beyond three plies.
        let board = board_from_str("X.. ... ...");

        let shallow = MinimaxConfig::bounded(Mark::O, 3);
        assert!(score_root_moves(&board, &shallow).iter().all(|&(_, score)| score == 0));
        assert_eq!(find_near_best_moves(&board, &shallow, 0.1), (1..9).collect::<Vec<_>>());

        let full = MinimaxConfig::unbounded(Mark::O);
        assert!(score_root_moves(&board, &full).iter().any(|&(_, score)| score < 0));
        assert_eq!(find_near_best_moves(&board, &full, 0.1), vec![4]);
    }

    #[test]
    fn test_tolerance_band_excludes_its_edge() {
        // Winning now scores 10; the fork at index 2 wins two plies later for 8.
        let board = board_from_str("OO. XX. ...");
        let config = MinimaxConfig::unbounded(Mark::X);
        let scores = score_root_moves(&board, &config);
        assert!(scores.contains(&(5, WIN_SCORE)));
        assert!(scores.contains(&(2, WIN_SCORE - 2)));

        assert_eq!(find_near_best_moves(&board, &config, 2.0), vec![5]);
        assert_eq!(find_near_best_moves(&board, &config, 2.5), vec![2, 5]);
    }

    #[test]
    fn test_zero_tolerance_keeps_the_best_move() {
        let board = board_from_str("OO. XX. ...");
        let config = MinimaxConfig::unbounded(Mark::X);
        assert_eq!(find_near_best_moves(&board, &config, 0.0), vec![5]);
    }

    #[test]
    fn test_empty_board_is_a_draw_under_perfect_play() {
        let config = MinimaxConfig::unbounded(Mark::X);
        for (_, score) in score_root_moves(&Board::new(), &config) {
            assert!(score <= 0);
        }
        assert_eq!(minimax(&Board::new(), 0, true, &config), 0);
    }

    #[test]
    fn test_best_move_prefers_lowest_index_on_ties() {
        // Every first move draws, so the first cell wins the tie.
        let config = MinimaxConfig::unbounded(Mark::X);
        assert_eq!(find_best_move(&Board::new(), &config), Some(0));
    }

    #[test]
    fn test_best_move_on_full_board_is_none() {
        let board = board_from_str("XOX XOO OXX");
        assert_eq!(find_best_move(&board, &MinimaxConfig::unbounded(Mark::X)), None);
        assert!(find_near_best_moves(&board, &MinimaxConfig::bounded(Mark::X, 3), 0.1).is_empty());
    }

    #[test]
    fn test_near_best_moves_collects_all_ties() {
        // With a single ply of lookahead only the immediate win stands out.
        let board = board_from_str("OO. XX. ...");
        let config = MinimaxConfig::bounded(Mark::X, 1);
        assert_eq!(find_near_best_moves(&board, &config, 0.1), vec![5]);

        // On an empty board with a shallow horizon every move looks neutral.
        let config = MinimaxConfig::bounded(Mark::X, 1);
        assert_eq!(
            find_near_best_moves(&Board::new(), &config, 0.1),
            (0..9).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let board = board_from_str("X.. .O. ...");
        let before = board;
        let _ = find_best_move(&board, &MinimaxConfig::unbounded(Mark::X));
        assert_eq!(board, before);
    }
}

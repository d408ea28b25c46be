use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_HARD_MISTAKE_PROBABILITY: f64 = 0.15;
pub const DEFAULT_HARD_MAX_DEPTH: usize = 3;
pub const DEFAULT_MEDIUM_SMART_MOVE_PROBABILITY: f64 = 0.5;
pub const DEFAULT_SCORE_TOLERANCE: f64 = 0.1;

/// Tuning knobs for the computer opponent.
///
/// Medium delegates to the full hard routine, including its own mistake
/// roll, so its effective random-move rate is
/// `(1 - smart) + smart * mistake` (57.5% with the defaults).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultySettings {
    pub hard_mistake_probability: f64,
    pub hard_max_depth: usize,
    pub medium_smart_move_probability: f64,
    /// On hard, root moves scoring less than this below the best are treated
    /// as equal to it. The best move itself always qualifies.
    pub score_tolerance: f64,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            hard_mistake_probability: DEFAULT_HARD_MISTAKE_PROBABILITY,
            hard_max_depth: DEFAULT_HARD_MAX_DEPTH,
            medium_smart_move_probability: DEFAULT_MEDIUM_SMART_MOVE_PROBABILITY,
            score_tolerance: DEFAULT_SCORE_TOLERANCE,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} must be between 0 and 1, got {}", name, value));
    }
    Ok(())
}

impl Validate for DifficultySettings {
    fn validate(&self) -> Result<(), String> {
        check_probability("hard_mistake_probability", self.hard_mistake_probability)?;
        check_probability(
            "medium_smart_move_probability",
            self.medium_smart_move_probability,
        )?;
        check_probability("score_tolerance", self.score_tolerance)?;
        if self.hard_max_depth == 0 {
            return Err("hard_max_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

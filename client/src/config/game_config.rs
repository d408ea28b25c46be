use common::config::Validate;
use common::games::tictactoe::{Difficulty, Mark};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THINK_DELAY_MS: u64 = 500;
const MAX_THINK_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub human_mark: Mark,
    pub difficulty: Difficulty,
    /// Pause before each computer move.
    pub think_delay_ms: u64,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {} (got {})",
                MAX_THINK_DELAY_MS, self.think_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            difficulty: Difficulty::Easy,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
        }
    }
}

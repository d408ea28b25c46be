mod config;
mod runner;
mod terminal_ui;

use std::time::Duration;
use clap::Parser;
use common::games::SessionRng;
use common::config::Validate;
use common::games::tictactoe::{Difficulty, Mark, TicTacToeGameState};
use common::log;
use common::logger::{self, LogTarget};
use config::{get_config_manager, Config};
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium, hard or impossible
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Your mark; X always moves first
    #[arg(long)]
    mark: Option<Mark>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    think_delay_ms: Option<u64>,
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<String>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
    /// Log to stderr
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty;
        }
        if let Some(mark) = self.mark {
            config.game.human_mark = mark;
        }
        if let Some(delay) = self.think_delay_ms {
            config.game.think_delay_ms = delay;
        }
    }

    /// File settings with the command-line overrides on top, checked again
    /// since flags bypass the validation done on load.
    fn effective_config(&self, mut config: Config) -> Result<Config, String> {
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let target = if args.verbose {
        LogTarget::Stderr
    } else {
        LogTarget::Disabled
    };
    logger::init_logger(prefix, target);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = args.effective_config(config_manager.get_config()?)?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Settings saved");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let state = TicTacToeGameState::new(config.game.human_mark, config.game.difficulty);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut game_runner = GameRunner::new(
        stdin,
        std::io::stdout(),
        config.ai,
        Duration::from_millis(config.game.think_delay_ms),
        rng,
    );

    let score = game_runner.run(state).await?;
    println!(
        "Thanks for playing! {} won, {} lost, {} drawn.",
        score.wins, score.losses, score.draws
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--difficulty",
            "impossible",
            "--mark",
            "o",
            "--think-delay-ms",
            "0",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.game.difficulty, Difficulty::Impossible);
        assert_eq!(config.game.human_mark, Mark::O);
        assert_eq!(config.game.think_delay_ms, 0);
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let args = Args::parse_from(["tictactoe_client"]);
        let mut config = Config::default();
        config.game.difficulty = Difficulty::Hard;
        args.apply(&mut config);
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.human_mark, Mark::X);
    }

    #[test]
    fn test_excessive_delay_flag_is_rejected() {
        let args = Args::parse_from(["tictactoe_client", "--think-delay-ms", "60000"]);
        let error = args.effective_config(Config::default()).unwrap_err();
        assert!(error.contains("think_delay_ms"), "{}", error);
    }

    #[test]
    fn test_valid_flags_pass_validation() {
        let args = Args::parse_from(["tictactoe_client", "--difficulty", "hard"]);
        let config = args.effective_config(Config::default()).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe_client", "--difficulty", "brutal"]).is_err());
    }
}

mod config;
mod game_config;

pub use config::{get_config_manager, Config};
pub use game_config::GameConfig;

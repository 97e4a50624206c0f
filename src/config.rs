pub mod game_config;
pub mod theme;

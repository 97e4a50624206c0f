pub mod item_store;
pub mod level;
pub mod game_engine;

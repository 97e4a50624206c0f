pub mod terminal_manager;
pub mod colour_mapper;

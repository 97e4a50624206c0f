use clap::ValueEnum;

use crate::config::theme::Theme;

pub const DEFAULT_VIEW_WIDTH : u16 = 40;
pub const DEFAULT_VIEW_HEIGHT : u16 = 20;
pub const MIN_VIEW_SIZE : u16 = 1;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum RenderMode {
    // ratatui panels with popups
    Tui,
    // Plain text written straight to the terminal
    Console
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub view_width : u16,
    pub view_height : u16,
    pub render_mode : RenderMode,
    pub player_name : String,
    pub theme : Theme
}

impl Settings {
    pub fn new(view_width: u16, view_height: u16, render_mode: RenderMode, player_name: String, theme: Theme) -> Settings {
        Settings {
            view_width: view_width.max(MIN_VIEW_SIZE),
            view_height: view_height.max(MIN_VIEW_SIZE),
            render_mode,
            player_name,
            theme
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings::new(DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT, RenderMode::Tui, String::from("Player"), Theme::default())
    }
}

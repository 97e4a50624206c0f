use ratatui::backend::Backend;

use crate::config::theme::Theme;
use crate::error::errors::GameError;
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::ui::draw_frame;
use crate::view::{FrameData, GameView};

/*
    Draws the game as ratatui panels: map above, status below, popups on top
 */
pub struct TuiView<B : Backend> {
    pub terminal_manager : TerminalManager<B>,
    theme : Theme
}

impl <B : Backend> TuiView<B> {
    pub fn new(terminal_manager: TerminalManager<B>, theme: Theme) -> TuiView<B> {
        TuiView { terminal_manager, theme }
    }
}

impl <B : Backend> GameView for TuiView<B> {
    fn draw(&mut self, frame_data: &FrameData) -> Result<(), GameError> {
        let theme = &self.theme;
        self.terminal_manager.terminal.draw(|frame| {
            draw_frame(frame, frame_data, theme);
        })?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GameError> {
        self.terminal_manager.clear_screen()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), GameError> {
        self.terminal_manager.restore()?;
        Ok(())
    }
}

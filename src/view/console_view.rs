use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::config::theme::Theme;
use crate::error::errors::GameError;
use crate::terminal::colour_mapper::map_console_colour;
use crate::view::{FrameData, GameView};

// Raw mode doesn't translate \n, so every line ends with an explicit carriage return
const LINE_END : &str = "\r\n";

/*
    Draws the game as plain lines of text: the map rows, a divider, then the status and any popup text
 */
pub struct ConsoleView<W : Write> {
    out : W,
    theme : Theme
}

impl <W : Write> ConsoleView<W> {
    pub fn new(out: W, theme: Theme) -> ConsoleView<W> {
        ConsoleView { out, theme }
    }

    pub fn get_output(&self) -> &W {
        &self.out
    }

    fn write_line(&mut self, line: &str) -> Result<(), GameError> {
        queue!(self.out, SetForegroundColor(map_console_colour(self.theme.text_colour)), Print(line), ResetColor, Print(LINE_END))?;
        Ok(())
    }
}

/*
    Builds the plain text that follows the map: a divider, the status lines and the popup (if any)
 */
pub fn build_text_block(frame_data: &FrameData) -> Vec<String> {
    let divider_width = frame_data.viewport.column_count().max(1);
    let mut lines = vec!["-".repeat(divider_width)];
    lines.extend(frame_data.status.iter().cloned());

    if let Some(popup) = &frame_data.popup {
        lines.push(String::new());
        lines.push(format!("== {} ==", popup.title));
        lines.extend(popup.lines.iter().cloned());
    }
    lines
}

impl <W : Write> GameView for ConsoleView<W> {
    fn draw(&mut self, frame_data: &FrameData) -> Result<(), GameError> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        for row in &frame_data.viewport.rows {
            for cell in row {
                queue!(self.out, SetForegroundColor(map_console_colour(cell.colour)), Print(&cell.symbol))?;
            }
            queue!(self.out, ResetColor, Print(LINE_END))?;
        }

        for line in build_text_block(frame_data) {
            self.write_line(&line)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GameError> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), GameError> {
        queue!(self.out, ResetColor, Clear(ClearType::All), cursor::MoveTo(0, 0), cursor::Show)?;
        self.out.flush()?;
        Ok(())
    }
}

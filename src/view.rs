pub mod tui_view;
pub mod console_view;

use crate::error::errors::GameError;
use crate::map::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title : String,
    pub lines : Vec<String>
}

/*
    Everything a view needs to draw one screen: the visible map, the status text and any open popup
 */
#[derive(Clone, Debug)]
pub struct FrameData {
    pub viewport : Viewport,
    pub status : Vec<String>,
    pub popup : Option<Popup>
}

/*
    A surface the game can be drawn to.
    Each draw replaces whatever was shown before
 */
pub trait GameView {
    fn draw(&mut self, frame_data: &FrameData) -> Result<(), GameError>;
    fn clear(&mut self) -> Result<(), GameError>;
    // Called once as the game exits
    fn finish(&mut self) -> Result<(), GameError>;
}

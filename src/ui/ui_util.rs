use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn build_paragraph_multi<'a>(messages: Vec<String>, style: Style) -> Paragraph<'a> {
    let lines: Vec<Line> = messages.into_iter()
        .map(|message| Line::from(Span::raw(message)))
        .collect();
    Paragraph::new(lines)
        .style(style)
        .alignment(ratatui::layout::Alignment::Left)
}

/*
    target - the expected size e.g height or width
    available - the space available
    Returns the offset to start at, or 0 if the target doesn't fit.
    Where the space doesn't divide evenly the extra column/row goes after the target (left / top align)
 */
fn center(target: u16, available: u16) -> u16 {
    if target >= available {
        return 0;
    }
    (available - target) / 2
}

/*
    Centers a box of the given size within the frame, shrinking it to fit if needed
 */
pub fn center_area(width: u16, height: u16, frame_size: Rect) -> Rect {
    let fitted_width = min(width, frame_size.width);
    let fitted_height = min(height, frame_size.height);
    let x = frame_size.x + center(fitted_width, frame_size.width);
    let y = frame_size.y + center(fitted_height, frame_size.height);
    Rect::new(x, y, fitted_width, fitted_height)
}

use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::theme::Theme;
use crate::map::viewport::Viewport;
use crate::terminal::colour_mapper::map_colour;
use crate::ui::ui_util::{build_paragraph_multi, center_area};
use crate::view::{FrameData, Popup};

const MAP_TITLE : &str = "Map";
const STATUS_TITLE : &str = "Status";
const MIN_MAP_PANEL_HEIGHT : u16 = 3;
// Border plus a column of padding either side
const POPUP_PADDING : u16 = 4;

fn build_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(map_colour(theme.border_colour)))
}

/*
    Splits the frame into the map panel (top) and the status panel (bottom), sized to fit the status text
 */
pub fn build_panel_areas(frame_area: Rect, status_line_count: usize) -> Rc<[Rect]> {
    let status_height = status_line_count as u16 + 2;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MIN_MAP_PANEL_HEIGHT), Constraint::Length(status_height)])
        .split(frame_area)
}

pub fn build_map_lines(viewport: &Viewport) -> Vec<Line<'static>> {
    viewport.rows.iter()
        .map(|row| {
            let spans: Vec<Span> = row.iter()
                .map(|cell| Span::styled(cell.symbol.clone(), Style::default().fg(map_colour(cell.colour))))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn draw_map(frame: &mut Frame, area: Rect, viewport: &Viewport, theme: &Theme) {
    let paragraph = Paragraph::new(build_map_lines(viewport))
        .block(build_block(MAP_TITLE, theme));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: &[String], theme: &Theme) {
    let paragraph = build_paragraph_multi(status.to_vec(), Style::default().fg(map_colour(theme.text_colour)))
        .block(build_block(STATUS_TITLE, theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_popup(frame: &mut Frame, popup: &Popup, theme: &Theme) {
    let longest_line = popup.lines.iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(popup.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = longest_line.saturating_add(POPUP_PADDING);
    let height = (popup.lines.len() as u16).saturating_add(2);
    let area = center_area(width, height, frame.area());

    let block = build_block(&popup.title, theme)
        .border_style(Style::default().fg(map_colour(theme.highlight_colour)));
    let paragraph = build_paragraph_multi(popup.lines.clone(), Style::default().fg(map_colour(theme.text_colour)))
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/*
    Draws one full screen:
    1. The map panel showing the viewport
    2. The status panel beneath it
    3. Any open popup (inventory / help) centered over the top
 */
pub fn draw_frame(frame: &mut Frame, frame_data: &FrameData, theme: &Theme) {
    let areas = build_panel_areas(frame.area(), frame_data.status.len());
    draw_map(frame, areas[0], &frame_data.viewport, theme);
    draw_status(frame, areas[1], &frame_data.status, theme);

    if let Some(popup) = &frame_data.popup {
        draw_popup(frame, popup, theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::theme::Theme;
    use crate::map::objects::items::Item;
    use crate::map::position::Position;
    use crate::map::viewport::render_viewport;
    use crate::terminal::terminal_manager;
    use crate::test::utils::test_utils::{buffer_lines, build_test_map, build_test_terrain_library};
    use crate::ui::ui::{build_panel_areas, draw_frame};
    use crate::view::{FrameData, Popup};

    fn build_frame_data(popup: Option<Popup>) -> FrameData {
        let mut map = build_test_map(4, 3, "grass");
        map.tiles[0][3] = String::from("wall");
        let items = vec![Item::with_defaults(String::from("Rope"), 1.0, 1.0, Position::new(2, 2))];
        let viewport = render_viewport(&map, &build_test_terrain_library(), Position::new(1, 1), &items, 10, 10, &Theme::default());
        FrameData { viewport, status: vec![String::from("Position: 1, 1"), String::from("Soft green grass.")], popup }
    }

    fn line_segment(line: &str, start: usize, length: usize) -> String {
        line.chars().skip(start).take(length).collect()
    }

    #[test]
    fn test_build_panel_areas() {
        let areas = build_panel_areas(Rect::new(0, 0, 40, 20), 3);
        assert_eq!(Rect::new(0, 0, 40, 15), areas[0]);
        assert_eq!(Rect::new(0, 15, 40, 5), areas[1]);
    }

    #[test]
    fn test_draw_frame() {
        // GIVEN a 30x12 test terminal
        let mut terminal_manager = terminal_manager::init_test(30, 12).unwrap();
        let frame_data = build_frame_data(None);

        // WHEN we draw a frame
        terminal_manager.terminal.draw(|frame| draw_frame(frame, &frame_data, &Theme::default())).unwrap();

        // THEN the map rows are drawn inside the map panel border
        let lines = buffer_lines(terminal_manager.terminal.backend().buffer());
        assert_eq!("...#", line_segment(&lines[1], 1, 4));
        assert_eq!(".@..", line_segment(&lines[2], 1, 4));
        assert_eq!("..?.", line_segment(&lines[3], 1, 4));

        // AND the status text is drawn inside the bottom panel (4 rows high, starting at row 8)
        assert!(lines[8].contains("Status"));
        assert_eq!("Position: 1, 1", line_segment(&lines[9], 1, 14));
        assert_eq!("Soft green grass.", line_segment(&lines[10], 1, 17));
    }

    #[test]
    fn test_draw_frame_with_popup() {
        let mut terminal_manager = terminal_manager::init_test(30, 12).unwrap();
        let popup = Popup { title: String::from("Inventory"), lines: vec![String::from("Your inventory is empty.")] };
        let frame_data = build_frame_data(Some(popup));

        terminal_manager.terminal.draw(|frame| draw_frame(frame, &frame_data, &Theme::default())).unwrap();

        // The popup is 28x3, centered at x: 1, y: 4
        let lines = buffer_lines(terminal_manager.terminal.backend().buffer());
        assert!(lines[4].contains("Inventory"));
        assert!(lines[5].contains("Your inventory is empty."));
    }
}

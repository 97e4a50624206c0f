use std::cmp::min;

use crate::map::position::{build_rectangular_area, Area, Position};

/*
    Returns the start of the display window along one axis.
    Centers on the given co-ordinate, then clamps into 0..=(map_size - view_size).
    If the map is smaller than the view the upper bound would be negative, in which case we start at 0
 */
fn clamp_display_start(center: u16, view_size: u16, map_size: u16) -> u16 {
    let half_view = view_size / 2;
    let desired_start = center.saturating_sub(half_view);
    let max_start = map_size.saturating_sub(view_size);
    min(desired_start, max_start)
}

/*
    Calculates the map display area (map co-ords), the "viewfinder" the player sees the map through.
    e.g:
     GIVEN a 20x20 map and a 10x10 view
     AND the player is at x: 12, y: 3
     THEN the display area starts at x: 7, y: 0 (y can't go below 0) and is 10x10

    The resulting area is never larger than the map itself
 */
pub fn calculate_map_display_area(center_position: Position, map_area: Area, view_width: u16, view_height: u16) -> Area {
    let map_start = map_area.start_position;
    let local_x = center_position.x.saturating_sub(map_start.x);
    let local_y = center_position.y.saturating_sub(map_start.y);

    let start_x = map_start.x + clamp_display_start(local_x, view_width, map_area.width);
    let start_y = map_start.y + clamp_display_start(local_y, view_height, map_area.height);

    let display_width = min(view_width, map_area.width);
    let display_height = min(view_height, map_area.height);
    build_rectangular_area(Position::new(start_x, start_y), display_width, display_height)
}

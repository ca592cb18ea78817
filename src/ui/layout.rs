use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Search field on top, hint bar at the bottom, body in between.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the result list and the trending panel.
///
/// Narrow terminals get the result list only.
pub fn body_columns(body: Rect) -> (Rect, Option<Rect>) {
    if body.width < 60 {
        return (body, None);
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(body);
    (columns[0], Some(columns[1]))
}

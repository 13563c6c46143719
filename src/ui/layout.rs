use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    /// Zero height when no notification is shown.
    pub banner: Rect,
    pub filter: Rect,
    pub name: Rect,
    pub number: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, with_banner: bool) -> Regions {
    let banner_height = if with_banner { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        banner: chunks[1],
        filter: chunks[2],
        name: chunks[3],
        number: chunks[4],
        list: chunks[5],
        footer: chunks[6],
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

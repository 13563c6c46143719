use crate::phonebook::{Notification, NotificationKind};
use crate::ui::app::Screen;
use crate::ui::focus::Field;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let view = &screen.view;
    let regions = layout_regions(frame.area(), view.banner.is_some());

    frame.render_widget(
        Header::new().widget(view.rows.len(), screen.total),
        regions.header,
    );

    if let Some(banner) = &view.banner {
        frame.render_widget(banner_widget(banner), regions.banner);
    }

    let focused = screen.focus.field;
    let inputs = [
        (Field::Filter, " filter shown with ", view.filter.as_str(), regions.filter),
        (Field::Name, " name ", view.draft.name.as_str(), regions.name),
        (Field::Number, " number ", view.draft.number.as_str(), regions.number),
    ];
    for (field, title, value, area) in inputs {
        frame.render_widget(input_widget(title, value, field == focused), area);
        if field == focused {
            place_cursor(frame, area, value);
        }
    }

    frame.render_widget(
        list_widget(screen, regions.list.height.saturating_sub(2) as usize),
        regions.list,
    );

    frame.render_widget(
        Footer::new().widget(regions.footer, view.submitting),
        regions.footer,
    );
}

/// Positive or negative banner; never called for an absent notification.
fn banner_widget(notification: &Notification) -> Paragraph<'static> {
    let color = match notification.kind {
        NotificationKind::Success => STATUS_OK,
        NotificationKind::Failure => STATUS_ERROR,
    };
    Paragraph::new(Line::from(Span::styled(
        format!(" {}", notification.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}

fn input_widget<'a>(title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let title_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(HEADER_TEXT),
    )))
    .block(
        Block::default()
            .title(Span::styled(title, title_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn place_cursor(frame: &mut Frame, area: Rect, value: &str) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let max_x = area.x + area.width - 2;
    let x = (area.x + 1).saturating_add(value.chars().count() as u16).min(max_x);
    frame.set_cursor_position((x, area.y + 1));
}

fn list_widget(screen: &Screen, height: usize) -> Paragraph<'static> {
    let view = &screen.view;
    let list_focused = screen.focus.list_focused();
    let selected = screen.focus.selected;

    let lines: Vec<Line<'static>> = if view.rows.is_empty() {
        vec![Line::from(Span::styled(
            "No entries.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))]
    } else {
        let offset = scroll_offset(selected, height);
        view.rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height.max(1))
            .map(|(idx, entry)| {
                let line = Line::from(vec![
                    Span::styled(entry.name.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::raw(" "),
                    Span::styled(entry.number.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::styled("  [del]", Style::default().fg(STATUS_ERROR)),
                ]);
                if list_focused && idx == selected {
                    line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
                } else {
                    line
                }
            })
            .collect()
    };

    let border = if list_focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Numbers ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// First row to draw so that `selected` stays visible.
fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return selected;
    }
    selected.saturating_sub(height - 1)
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Height of the input row, borders included.
pub const INPUT_HEIGHT: u16 = 3;
pub const ADD_BUTTON_WIDTH: u16 = 9;
pub const CLEAR_BUTTON_WIDTH: u16 = 15;

/// Screen regions shared by the renderer and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub input: Rect,
    pub add_button: Rect,
    pub clear_button: Rect,
    pub list: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, toast_active: bool) -> ScreenLayout {
    let footer_rows = 1 + u16::from(toast_active);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(footer_rows),
        ])
        .split(area);
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(ADD_BUTTON_WIDTH),
            Constraint::Length(CLEAR_BUTTON_WIDTH),
        ])
        .split(rows[0]);
    let footer = rows[2];
    let status = Rect {
        y: footer.y + footer.height.saturating_sub(1),
        height: footer.height.min(1),
        ..footer
    };
    let toast = (toast_active && footer.height > 1).then_some(Rect {
        height: 1,
        ..footer
    });
    ScreenLayout {
        input: controls[0],
        add_button: controls[1],
        clear_button: controls[2],
        list: rows[1],
        toast,
        status,
    }
}

/// Area inside a bordered control.
pub fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Rows available for notes inside the list border.
pub fn list_inner(list: Rect) -> Rect {
    bordered_inner(list)
}

/// First note index to draw so the window never runs past the end.
pub const fn list_window_start(len: usize, scroll_offset: usize, visible_rows: usize) -> usize {
    let max_start = len.saturating_sub(visible_rows);
    if scroll_offset < max_start {
        scroll_offset
    } else {
        max_start
    }
}

pub const fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

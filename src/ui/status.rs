use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let count = model.notes().len();
    let noun = if count == 1 { "note" } else { "notes" };
    let focus = match model.focus {
        Focus::Input => "input",
        Focus::List => "list",
    };
    let status = format!(
        " {count} {noun}  {}  [{focus}]  Tab:switch  ?:help",
        model.store.location()
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}

//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn placeholder() -> Style {
    Style::default()
        .fg(Color::Indexed(245))
        .add_modifier(Modifier::ITALIC)
}

pub fn dim() -> Style {
    Style::default().fg(Color::Indexed(245))
}

pub fn delete_control() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn add_button() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub fn clear_button() -> Style {
    Style::default().fg(Color::Red)
}

pub fn section() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn popup() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

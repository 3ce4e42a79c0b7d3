use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::{ConfirmPrompt, Model};

use super::style;

fn alert_rect(area: Rect) -> Rect {
    let popup_width = area.width.saturating_sub(16).clamp(30, 60);
    centered_popup_rect(popup_width, 7, area)
}

fn confirm_rect(area: Rect) -> Rect {
    let popup_width = area.width.saturating_sub(16).clamp(30, 64);
    centered_popup_rect(popup_width, 9, area)
}

pub fn render_alert_overlay(message: &str, frame: &mut Frame, area: Rect) {
    let popup = alert_rect(area);
    let lines = vec![
        Line::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled("Press any key to continue", style::dim()),
    ];
    let block = Block::default()
        .title("Alert")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Yellow))
        .style(style::popup());
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

pub fn render_confirm_overlay(prompt: ConfirmPrompt, frame: &mut Frame, area: Rect) {
    let popup = confirm_rect(area);
    let lines = vec![
        Line::raw(prompt.question()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y]", style::section()),
            Span::raw(" OK    "),
            Span::styled("[n]", style::section()),
            Span::raw(" Cancel"),
        ]),
    ];
    let block = Block::default()
        .title(prompt.title())
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .border_style(Style::default().fg(Color::Red))
        .style(style::popup());
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = style::section();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Input", section_style));
    lines.push(Line::raw("  Enter               Add note"));
    lines.push(Line::raw("  Esc                 Clear input"));
    lines.push(Line::raw("  Tab / Down          Go to list"));
    lines.push(Line::raw("  Ctrl-Left/Right     Word movement"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("List", section_style));
    lines.push(Line::raw("  j/k or Up/Down      Select"));
    lines.push(Line::raw("  g / G               First / last"));
    lines.push(Line::raw("  d / x / Delete      Delete selected note"));
    lines.push(Line::raw("  Tab / i / a         Back to input"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  X (list) / Ctrl-x           Clear all notes"));
    lines.push(Line::raw("  Mouse                       Click Add, Clear all, [Delete]"));
    lines.push(Line::raw("  q (list) / Ctrl-c / Ctrl-q  Quit"));
    lines.push(Line::raw("  ? (list) / F1               Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Storage", section_style));
    lines.push(Line::raw(format!("  Notes: {}", model.store.location())));
    lines.push(Line::raw(format!("  Global config: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(style::popup());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}

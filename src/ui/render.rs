use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{Focus, Model};
use crate::store::Note;

use super::layout::{bordered_inner, list_window_start, screen_layout};
use super::{DELETE_LABEL, EMPTY_PLACEHOLDER, MIN_ROW_WIDTH_WITH_DELETE, overlays, status, style};

/// Render the complete UI.
///
/// Every frame is rebuilt from the model; nothing carries over from the
/// previous one.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = screen_layout(area, model.active_toast().is_some());

    render_input(model, frame, layout.input);
    render_button(frame, layout.add_button, "Add", style::add_button());
    render_button(frame, layout.clear_button, "Clear all", style::clear_button());
    render_notes(model, frame, layout.list);
    if let Some(toast_area) = layout.toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, layout.status);

    if let Some(message) = model.alert.as_deref() {
        overlays::render_alert_overlay(message, frame, area);
    } else if let Some(prompt) = model.confirm {
        overlays::render_confirm_overlay(prompt, frame, area);
    } else if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_input(model: &Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Input;
    let block = Block::default()
        .title("New note")
        .borders(Borders::ALL)
        .border_style(if focused {
            style::focused_border()
        } else {
            Style::default()
        });
    let inner = bordered_inner(area);
    let (shown, cursor_col) = model.input.visible(inner.width as usize);
    let content = if model.input.is_empty() && !focused {
        Line::styled("Type a note and press Enter", style::placeholder())
    } else {
        Line::raw(shown.to_string())
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && !model.modal_active() && !model.help_visible && inner.width > 0 {
        #[allow(clippy::cast_possible_truncation)]
        // cursor_col is bounded by the field width, a u16.
        let x = inner.x + (cursor_col as u16).min(inner.width - 1);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, label_style: Style) {
    let button = Paragraph::new(Line::styled(label.to_string(), label_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn render_notes(model: &Model, frame: &mut Frame, area: Rect) {
    let notes = model.notes();
    let block = Block::default()
        .title(format!("Notes ({})", notes.len()))
        .borders(Borders::ALL)
        .border_style(if model.focus == Focus::List {
            style::focused_border()
        } else {
            Style::default()
        });
    let inner = bordered_inner(area);
    frame.render_widget(block, area);

    if notes.is_empty() {
        let placeholder = Line::styled(format!("  {EMPTY_PLACEHOLDER}"), style::placeholder());
        frame.render_widget(Paragraph::new(placeholder), inner);
        return;
    }

    let visible_rows = inner.height as usize;
    let start = list_window_start(notes.len(), model.list_scroll_offset, visible_rows);
    let list_focused = model.focus == Focus::List;
    let lines: Vec<Line> = notes
        .iter()
        .enumerate()
        .skip(start)
        .take(visible_rows)
        .map(|(i, note)| {
            let selected = model.selected == Some(i);
            note_line(note, inner.width as usize, selected, selected && list_focused)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// One list row: marker, note text padded to width, delete control at the
/// right edge. Rows narrower than [`MIN_ROW_WIDTH_WITH_DELETE`] drop the
/// control.
pub(super) fn note_line(note: &Note, width: usize, selected: bool, highlight: bool) -> Line<'static> {
    let label_width = DELETE_LABEL.width();
    let marker = if selected { "> " } else { "  " };
    let text_style = if highlight {
        Style::default().reversed()
    } else {
        Style::default()
    };
    if width < MIN_ROW_WIDTH_WITH_DELETE {
        let text = truncate_to_width(&note.text, width.saturating_sub(marker.len()));
        return Line::from(vec![Span::raw(marker), Span::styled(text, text_style)]);
    }
    let text_width = width.saturating_sub(marker.len() + label_width + 1);
    let text = truncate_to_width(&note.text, text_width);
    let pad = text_width.saturating_sub(text.width()) + 1;
    Line::from(vec![
        Span::raw(marker),
        Span::styled(text, text_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(DELETE_LABEL, style::delete_control()),
    ])
}

/// Cut `text` to at most `max_width` columns, ending in an ellipsis when
/// anything was dropped. Control characters show as spaces.
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let text: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if text.width() <= max_width {
        return text;
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

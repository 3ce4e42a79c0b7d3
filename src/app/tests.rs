use std::path::PathBuf;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tempfile::tempdir;

use crate::store::{FileStore, KeyValueStore, MemoryStore, NOTES_KEY, NoteStore};
use crate::ui::{MIN_ROW_WIDTH_WITH_DELETE, list_inner, screen_layout};

use super::event_loop::ResizeDebouncer;
use super::input::{ListHit, list_hit};
use super::{App, ConfirmPrompt, Focus, Message, Model, update};

fn frozen_clock() -> u64 {
    1_000
}

fn create_test_model() -> Model {
    Model::new(NoteStore::default().with_clock(frozen_clock), (80, 24))
}

fn create_model_with_notes(texts: &[&str]) -> Model {
    let mut store = NoteStore::default().with_clock(frozen_clock);
    for text in texts {
        store.add(text).unwrap();
    }
    Model::new(store, (80, 24))
}

fn test_app() -> App {
    App::new(PathBuf::from("unused"))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn type_text(app: &App, model: &mut Model, text: &str) {
    for ch in text.chars() {
        app.dispatch(model, Message::InputChar(ch));
    }
}

fn texts(model: &Model) -> Vec<String> {
    model.notes().iter().map(|n| n.text.clone()).collect()
}

#[test]
fn test_typing_updates_input() {
    let app = test_app();
    let mut model = create_test_model();
    type_text(&app, &mut model, "hi");
    assert_eq!(model.input.text(), "hi");
}

#[test]
fn test_add_note_appends_and_clears_input() {
    let app = test_app();
    let mut model = create_test_model();
    type_text(&app, &mut model, "  Buy milk ");
    app.dispatch(&mut model, Message::AddNote);

    assert_eq!(texts(&model), ["Buy milk"]);
    assert!(model.input.is_empty());
    assert!(model.alert.is_none());
}

#[test]
fn test_add_blank_note_raises_alert_without_change() {
    let app = test_app();
    let mut model = create_test_model();
    type_text(&app, &mut model, "   ");
    app.dispatch(&mut model, Message::AddNote);

    assert!(model.notes().is_empty());
    assert_eq!(model.alert.as_deref(), Some("Note cannot be empty!"));
    assert_eq!(model.input.text(), "   ");
}

#[test]
fn test_alert_blocks_keys_until_dismissed() {
    let app = test_app();
    let mut model = create_test_model();
    app.dispatch(&mut model, Message::AddNote);
    assert!(model.alert.is_some());

    let msg = app.handle_key(key(KeyCode::Char('x')), &model);
    assert_eq!(msg, Some(Message::DismissAlert));
    app.dispatch(&mut model, msg.unwrap());
    assert!(model.alert.is_none());
    assert!(model.input.is_empty());
}

#[test]
fn test_delete_selected_removes_that_note() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a", "b", "c"]);
    app.dispatch(&mut model, Message::FocusList);
    app.dispatch(&mut model, Message::SelectDown);
    assert_eq!(model.selected, Some(1));

    app.dispatch(&mut model, Message::DeleteSelected);
    assert_eq!(texts(&model), ["a", "c"]);
    assert_eq!(model.selected, Some(1));
}

#[test]
fn test_deleting_last_row_moves_selection_up() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a", "b"]);
    app.dispatch(&mut model, Message::FocusList);
    app.dispatch(&mut model, Message::SelectLast);
    app.dispatch(&mut model, Message::DeleteSelected);
    assert_eq!(texts(&model), ["a"]);
    assert_eq!(model.selected, Some(0));

    app.dispatch(&mut model, Message::DeleteSelected);
    assert!(model.notes().is_empty());
    assert_eq!(model.selected, None);
}

#[test]
fn test_delete_unknown_id_changes_nothing() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a"]);
    app.dispatch(&mut model, Message::DeleteNote(424_242));
    assert_eq!(texts(&model), ["a"]);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_request_clear_all_opens_prompt_without_clearing() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a", "b"]);
    app.dispatch(&mut model, Message::RequestClearAll);
    assert_eq!(model.confirm, Some(ConfirmPrompt::ClearAll));
    assert_eq!(model.notes().len(), 2);
}

#[test]
fn test_clear_all_confirmed_empties_collection() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a", "b"]);
    app.dispatch(&mut model, Message::RequestClearAll);
    app.dispatch(&mut model, Message::ConfirmAnswer(true));
    assert!(model.notes().is_empty());
    assert!(model.confirm.is_none());
}

#[test]
fn test_clear_all_declined_keeps_collection() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a", "b"]);
    app.dispatch(&mut model, Message::RequestClearAll);
    app.dispatch(&mut model, Message::ConfirmAnswer(false));
    assert_eq!(texts(&model), ["a", "b"]);
    assert!(model.confirm.is_none());
}

#[test]
fn test_confirm_answer_without_prompt_is_ignored() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a"]);
    app.dispatch(&mut model, Message::ConfirmAnswer(true));
    assert_eq!(texts(&model), ["a"]);
}

#[test]
fn test_confirm_prompt_keys() {
    let app = test_app();
    let mut model = create_test_model();
    model.confirm = Some(ConfirmPrompt::ClearAll);
    assert_eq!(
        app.handle_key(key(KeyCode::Char('y')), &model),
        Some(Message::ConfirmAnswer(true))
    );
    assert_eq!(
        app.handle_key(key(KeyCode::Enter), &model),
        Some(Message::ConfirmAnswer(true))
    );
    assert_eq!(
        app.handle_key(key(KeyCode::Esc), &model),
        Some(Message::ConfirmAnswer(false))
    );
    assert_eq!(app.handle_key(key(KeyCode::Char('d')), &model), None);
}

#[test]
fn test_scenario_through_messages() {
    let app = test_app();
    let mut model = create_test_model();
    type_text(&app, &mut model, "Buy milk");
    app.dispatch(&mut model, Message::AddNote);
    type_text(&app, &mut model, "Walk dog");
    app.dispatch(&mut model, Message::AddNote);
    assert_eq!(texts(&model), ["Buy milk", "Walk dog"]);

    let milk = model.notes()[0].id;
    app.dispatch(&mut model, Message::DeleteNote(milk));
    assert_eq!(texts(&model), ["Walk dog"]);

    app.dispatch(&mut model, Message::RequestClearAll);
    app.dispatch(&mut model, Message::ConfirmAnswer(true));
    assert!(model.notes().is_empty());
}

#[test]
fn test_input_keys_map_to_messages() {
    let app = test_app();
    let model = create_test_model();
    assert_eq!(
        app.handle_key(key(KeyCode::Char('d')), &model),
        Some(Message::InputChar('d'))
    );
    assert_eq!(app.handle_key(key(KeyCode::Enter), &model), Some(Message::AddNote));
    assert_eq!(app.handle_key(key(KeyCode::Tab), &model), Some(Message::FocusList));
    assert_eq!(app.handle_key(ctrl('x'), &model), Some(Message::RequestClearAll));
    assert_eq!(app.handle_key(ctrl('c'), &model), Some(Message::Quit));
}

#[test]
fn test_list_keys_map_to_messages() {
    let app = test_app();
    let mut model = create_model_with_notes(&["a"]);
    model = update(model, Message::FocusList);
    assert_eq!(
        app.handle_key(key(KeyCode::Char('d')), &model),
        Some(Message::DeleteSelected)
    );
    assert_eq!(app.handle_key(key(KeyCode::Char('j')), &model), Some(Message::SelectDown));
    assert_eq!(
        app.handle_key(key(KeyCode::Char('X')), &model),
        Some(Message::RequestClearAll)
    );
    assert_eq!(app.handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
}

#[test]
fn test_focus_list_selects_first_note() {
    let model = create_model_with_notes(&["a", "b"]);
    let model = update(model, Message::FocusList);
    assert_eq!(model.focus, Focus::List);
    assert_eq!(model.selected, Some(0));
}

#[test]
fn test_focus_list_on_empty_collection_selects_nothing() {
    let model = update(create_test_model(), Message::FocusList);
    assert_eq!(model.selected, None);
}

#[test]
fn test_selection_scrolls_into_view() {
    let names: Vec<String> = (0..40).map(|i| format!("note {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut model = create_model_with_notes(&refs);
    model = update(model, Message::FocusList);
    model = update(model, Message::SelectLast);

    let visible = model.list_visible_rows();
    assert_eq!(model.selected, Some(39));
    assert_eq!(model.list_scroll_offset, 40 - visible);

    model = update(model, Message::SelectFirst);
    assert_eq!(model.list_scroll_offset, 0);
}

#[test]
fn test_click_delete_control_deletes_that_note() {
    let app = test_app();
    let mut model = create_model_with_notes(&["first", "second"]);
    let layout = screen_layout(Rect::new(0, 0, 80, 24), false);
    let inner = list_inner(layout.list);
    let row = inner.y + 1;
    let col = inner.x + inner.width - 2;

    let msg = app.handle_mouse(click(col, row), &model).unwrap();
    let second = model.notes()[1].id;
    assert_eq!(msg, Message::DeleteNote(second));
    app.dispatch(&mut model, msg);
    assert_eq!(texts(&model), ["first"]);
}

#[test]
fn test_narrow_list_has_no_delete_zone() {
    let mut store = NoteStore::default().with_clock(frozen_clock);
    store.add("first").unwrap();
    let model = Model::new(store, (10, 24));
    let layout = screen_layout(Rect::new(0, 0, 10, 24), false);
    let inner = list_inner(layout.list);
    assert!((inner.width as usize) < MIN_ROW_WIDTH_WITH_DELETE);

    let last_col = inner.x + inner.width - 1;
    assert_eq!(
        list_hit(&model, layout.list, last_col, inner.y),
        Some(ListHit::Row(0))
    );
    let app = test_app();
    assert_eq!(
        app.handle_mouse(click(last_col, inner.y), &model),
        Some(Message::SelectIndex(0))
    );
}

#[test]
fn test_click_row_text_selects_it() {
    let app = test_app();
    let model = create_model_with_notes(&["first", "second"]);
    let layout = screen_layout(Rect::new(0, 0, 80, 24), false);
    let inner = list_inner(layout.list);

    let msg = app.handle_mouse(click(inner.x + 3, inner.y), &model);
    assert_eq!(msg, Some(Message::SelectIndex(0)));
    assert_eq!(
        list_hit(&model, layout.list, inner.x + 3, inner.y + 5),
        None,
        "rows past the last note are empty"
    );
    assert_eq!(
        list_hit(&model, layout.list, inner.x + 3, inner.y + 1),
        Some(ListHit::Row(1))
    );
}

#[test]
fn test_click_buttons() {
    let app = test_app();
    let model = create_test_model();
    let layout = screen_layout(Rect::new(0, 0, 80, 24), false);
    assert_eq!(
        app.handle_mouse(click(layout.add_button.x + 2, layout.add_button.y + 1), &model),
        Some(Message::AddNote)
    );
    assert_eq!(
        app.handle_mouse(
            click(layout.clear_button.x + 2, layout.clear_button.y + 1),
            &model
        ),
        Some(Message::RequestClearAll)
    );
}

#[test]
fn test_paste_goes_to_input() {
    let app = test_app();
    let mut model = create_test_model();
    let mut debouncer = ResizeDebouncer::new(100);
    let msg = app
        .handle_event(&Event::Paste("one\ntwo".to_string()), &model, 0, &mut debouncer)
        .unwrap();
    app.dispatch(&mut model, msg);
    assert_eq!(model.input.text(), "one two");
}

#[test]
fn test_resize_event_is_debounced() {
    let app = test_app();
    let model = create_test_model();
    let mut debouncer = ResizeDebouncer::new(100);
    let msg = app.handle_event(&Event::Resize(120, 40), &model, 0, &mut debouncer);
    assert!(msg.is_none());
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take_ready(50), None);
    assert_eq!(debouncer.take_ready(100), Some((120, 40)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_help_toggle_and_any_key_hides() {
    let app = test_app();
    let mut model = create_test_model();
    app.dispatch(&mut model, Message::ToggleHelp);
    assert!(model.help_visible);
    let msg = app.handle_key(key(KeyCode::Char('z')), &model);
    assert_eq!(msg, Some(Message::HideHelp));
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_open_store_reads_existing_file() {
    let dir = tempdir().unwrap();
    let mut slot = FileStore::new(dir.path());
    slot.set(NOTES_KEY, r#"[{"id":5,"text":"persisted"}]"#).unwrap();

    let app = App::new(dir.path().to_path_buf());
    let (store, reset) = app.open_store().unwrap();
    assert!(!reset);
    assert_eq!(store.notes()[0].text, "persisted");
}

#[test]
fn test_open_store_fails_on_corrupt_file_by_default() {
    let dir = tempdir().unwrap();
    let mut slot = FileStore::new(dir.path());
    slot.set(NOTES_KEY, "not json").unwrap();

    let app = App::new(dir.path().to_path_buf());
    let err = app.open_store().unwrap_err();
    assert!(format!("{err:#}").contains("does not hold a valid note list"));
}

#[test]
fn test_open_store_resets_corrupt_file_when_enabled() {
    let dir = tempdir().unwrap();
    let mut slot = FileStore::new(dir.path());
    slot.set(NOTES_KEY, "not json").unwrap();

    let app = App::new(dir.path().to_path_buf()).with_reset_corrupt(true);
    let (store, reset) = app.open_store().unwrap();
    assert!(reset);
    assert!(store.is_empty());
}

#[test]
fn test_mutations_are_persisted_through_model() {
    let dir = tempdir().unwrap();
    let app = App::new(dir.path().to_path_buf());
    let (store, _) = app.open_store().unwrap();
    let mut model = Model::new(store, (80, 24));
    type_text(&app, &mut model, "saved");
    app.dispatch(&mut model, Message::AddNote);

    let reopened = App::new(dir.path().to_path_buf()).open_store().unwrap().0;
    assert_eq!(reopened.notes(), model.notes());
}

#[test]
fn test_memory_store_model_default_is_empty() {
    let model = Model::default();
    assert!(model.notes().is_empty());
    assert!(MemoryStore::new().get(NOTES_KEY).unwrap().is_none());
}

//! Key bindings, focus and paste handling.

use super::helpers::*;
use crate::app::state::Focus;
use ratatui::crossterm::event::KeyCode;

// =========================================================================
// Quitting
// =========================================================================

#[tokio::test]
async fn ctrl_c_quits_from_anywhere() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;

    app.handle_key(ctrl_key('c'));

    assert!(app.should_quit());
}

#[tokio::test]
async fn q_types_into_search_box() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;

    app.handle_key(char_key('q'));

    assert!(!app.should_quit());
    assert_eq!(app.view.search.text(), "q");
}

#[tokio::test]
async fn q_quits_from_results_grid() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.handle_key(key(KeyCode::Tab));

    app.handle_key(char_key('q'));

    assert!(app.should_quit());
}

// =========================================================================
// Focus
// =========================================================================

#[tokio::test]
async fn tab_toggles_focus() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    assert_eq!(app.view.focus, Focus::Search);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.view.focus, Focus::Results);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.view.focus, Focus::Search);
}

#[tokio::test]
async fn slash_returns_to_search_box() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.handle_key(key(KeyCode::Tab));

    app.handle_key(char_key('/'));

    assert_eq!(app.view.focus, Focus::Search);
    assert_eq!(app.view.search.text(), "");
}

// =========================================================================
// Results grid
// =========================================================================

#[tokio::test]
async fn arrows_move_selection_by_cell_and_row() {
    let source = StubSource::new().with_random(summaries(7));
    let (mut app, _source) = create_settled_app(source).await;
    // 100 columns wide: three cards per row.
    assert_eq!(app.layout.grid_columns, 3);
    app.handle_key(key(KeyCode::Tab));

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.view.results.selected_index(), Some(1));

    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.view.results.selected_index(), Some(4));

    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.view.results.selected_index(), Some(6));

    app.handle_key(key(KeyCode::Home));
    assert_eq!(app.view.results.selected_index(), Some(0));

    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.view.results.selected_index(), Some(0));

    app.handle_key(key(KeyCode::End));
    assert_eq!(app.view.results.selected_index(), Some(6));
}

#[tokio::test]
async fn enter_on_results_opens_selected_recipe() {
    let (mut app, source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.handle_key(key(KeyCode::Tab));

    app.handle_key(key(KeyCode::Enter));
    settle(&mut app).await;

    assert_eq!(source.calls(), vec!["random", "lookup:52771"]);
    assert!(app.view.modal.is_open());
}

#[tokio::test]
async fn enter_on_empty_results_does_nothing() {
    let (mut app, source) = create_settled_app(StubSource::new()).await;
    app.handle_key(key(KeyCode::Tab));

    app.handle_key(key(KeyCode::Enter));

    assert_eq!(source.calls(), vec!["random"]);
    assert_eq!(app.generations.detail, 0);
}

// =========================================================================
// Modal keys
// =========================================================================

#[tokio::test]
async fn escape_closes_open_modal() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;

    app.handle_key(key(KeyCode::Esc));

    assert!(app.view.modal.is_hidden());
    assert!(app.view.modal.detail().is_none());
}

#[tokio::test]
async fn escape_with_closed_modal_is_a_no_op() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    type_text(&mut app, "pasta");
    let results = app.view.results.clone();
    let status = app.view.status.clone();

    app.handle_key(key(KeyCode::Esc));

    assert!(app.view.modal.is_hidden());
    assert!(!app.should_quit());
    assert_eq!(app.view.search.text(), "pasta");
    assert_eq!(app.view.results, results);
    assert_eq!(app.view.status, status);
}

#[tokio::test]
async fn q_closes_modal_without_quitting() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;

    app.handle_key(char_key('q'));

    assert!(app.view.modal.is_hidden());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn typing_is_ignored_while_modal_is_open() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;

    type_text(&mut app, "abc");
    app.handle_key(key(KeyCode::Tab));

    assert_eq!(app.view.search.text(), "");
    assert_eq!(app.view.focus, Focus::Search);
    assert!(app.view.modal.is_open());
}

#[tokio::test]
async fn modal_scroll_is_clamped_to_content() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;
    // A short screen so the recipe overflows the popup.
    app.update_layout(ratatui::layout::Rect::new(0, 0, 60, 12));

    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.view.modal.scroll(), 1);

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.view.modal.scroll(), 0);

    for _ in 0..200 {
        app.handle_key(key(KeyCode::PageDown));
    }
    let max = app.view.modal.scroll();
    assert!(max > 0);
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.view.modal.scroll(), max);

    app.handle_key(key(KeyCode::Home));
    assert_eq!(app.view.modal.scroll(), 0);

    app.handle_key(key(KeyCode::End));
    assert_eq!(app.view.modal.scroll(), max);
}

#[tokio::test]
async fn ctrl_r_works_while_modal_is_open() {
    let (mut app, source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;

    app.handle_key(ctrl_key('r'));
    settle(&mut app).await;

    assert_eq!(source.calls(), vec!["random", "lookup:52771", "random"]);
    assert!(app.view.modal.is_open());
}

// =========================================================================
// Paste
// =========================================================================

#[tokio::test]
async fn paste_goes_to_search_box_as_one_line() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.handle_key(key(KeyCode::Tab));

    app.handle_paste("chicken\r\ncurry\u{1b}");

    assert_eq!(app.view.focus, Focus::Search);
    assert_eq!(app.view.search.text(), "chicken  curry");
    assert_eq!(app.view.search.textarea.lines().len(), 1);
}

#[tokio::test]
async fn pasted_query_can_be_submitted() {
    let source = StubSource::new().with_search("beef stew", summaries(2));
    let (mut app, source) = create_settled_app(source).await;

    app.handle_paste("beef stew\n");
    app.handle_key(key(KeyCode::Enter));
    settle(&mut app).await;

    assert_eq!(source.calls().last().map(String::as_str), Some("search:beef stew"));
    assert_eq!(app.view.results.cards().len(), 2);
}

#[tokio::test]
async fn paste_is_ignored_while_modal_is_open() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    app.open_detail("52771".into());
    settle(&mut app).await;

    app.handle_paste("soup");

    assert_eq!(app.view.search.text(), "");
}

#[tokio::test]
async fn backspace_edits_search_text() {
    let (mut app, _source) = create_settled_app(StubSource::with_arrabiata()).await;
    type_text(&mut app, "soupx");

    app.handle_key(key(KeyCode::Backspace));

    assert_eq!(app.view.search.text(), "soup");
}

//! Screens and flows of the terminal UI, rendered on a test backend.

mod common;

use common::gated_api::{GatedApi, COLLECTION};
use common::item;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use itemdesk::effects::EffectCoordinator;
use itemdesk::router::Route;
use itemdesk::store::ItemStore;
use itemdesk::ui::input::handle_key;
use itemdesk::ui::render::draw;
use itemdesk::ui::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

fn make_app(api: Arc<GatedApi>, start: Route) -> App {
    let (store, sender) = ItemStore::new();
    let effects = EffectCoordinator::new(api, sender, Handle::current());
    App::new(store, effects, start, "http://test.local/items")
}

/// Let background requests finish and apply their outcomes.
async fn settle(app: &mut App) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.sync();
        if !app.is_busy() {
            return;
        }
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[tokio::test]
async fn test_list_shows_loading_then_items() {
    let api = Arc::new(GatedApi::new(vec![item(1, "Alpha"), item(2, "Beta")]));
    let gate = api.gate(COLLECTION);
    let mut app = make_app(api, Route::List);

    assert!(screen(&app).contains("Loading items..."));

    gate.send(()).unwrap();
    settle(&mut app).await;

    let text = screen(&app);
    assert!(text.contains("Items (2)"));
    assert!(text.contains("Alpha"));
    assert!(text.contains("Beta"));
}

#[tokio::test]
async fn test_empty_list_message() {
    let mut app = make_app(Arc::new(GatedApi::new(Vec::new())), Route::List);
    settle(&mut app).await;
    assert!(screen(&app).contains("No items available."));
}

#[tokio::test]
async fn test_create_navigates_to_list_with_one_shot_message() {
    let api = Arc::new(GatedApi::new(vec![item(1, "Alpha")]));
    let mut app = make_app(api.clone(), Route::List);
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.route(), Route::Create);
    type_text(&mut app, "Gamma");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "third");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(app.route(), Route::List);
    assert_eq!(app.flash(), Some("Item successfully added!"));
    settle(&mut app).await;
    let text = screen(&app);
    assert!(text.contains("Item successfully added!"));
    assert!(text.contains("Gamma"));
    assert_eq!(api.items()[1].description.as_deref(), Some("third"));

    // Leaving and coming back does not show the message again.
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;
    press(&mut app, KeyCode::Esc);
    settle(&mut app).await;
    assert_eq!(app.route(), Route::List);
    assert!(app.flash().is_none());
    assert!(!screen(&app).contains("Item successfully added!"));
}

#[tokio::test]
async fn test_blank_name_shows_validation_error() {
    let api = Arc::new(GatedApi::new(Vec::new()));
    let mut app = make_app(api.clone(), Route::Create);

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), Route::Create);
    assert!(screen(&app).contains("Name is required"));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_edit_prefills_and_skips_unchanged_submit() {
    let api = Arc::new(GatedApi::new(vec![item(1, "Alpha")]));
    let mut app = make_app(api.clone(), Route::Edit(1));
    settle(&mut app).await;

    assert_eq!(app.form().name, "Alpha");
    assert!(screen(&app).contains("Alpha"));
    let calls_before = api.calls();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), Route::List);
    settle(&mut app).await;
    // Only the list fetch on arrival; no update was sent.
    assert_eq!(api.calls(), calls_before + 1);
    assert!(app.flash().is_none());
}

#[tokio::test]
async fn test_edit_submits_changes_and_returns_with_message() {
    let api = Arc::new(GatedApi::new(vec![item(1, "Alpha")]));
    let mut app = make_app(api.clone(), Route::Edit(1));
    settle(&mut app).await;

    type_text(&mut app, "2");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(app.route(), Route::List);
    assert_eq!(app.flash(), Some("Item successfully updated!"));
    assert_eq!(api.items()[0].name, "Alpha2");
}

#[tokio::test]
async fn test_delete_asks_for_confirmation() {
    let api = Arc::new(GatedApi::new(vec![item(1, "Alpha"), item(2, "Beta")]));
    let mut app = make_app(api.clone(), Route::List);
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.confirm_delete(), Some(1));
    let text = screen(&app);
    assert!(text.contains("Confirm Delete"));
    assert!(text.contains("Are you sure you want to delete this item?"));

    press(&mut app, KeyCode::Char('n'));
    assert!(app.confirm_delete().is_none());
    assert_eq!(api.items().len(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app).await;

    assert_eq!(app.state().items, vec![item(2, "Beta")]);
    let text = screen(&app);
    assert!(text.contains("Item successfully deleted!"));
    assert!(!text.contains("Alpha"));
}

#[tokio::test]
async fn test_show_renders_detail_card() {
    let mut detailed = item(3, "Gamma");
    detailed.description = Some("third item".to_string());
    detailed.updated_at = Some("2024-03-01T09:30:00Z".to_string());
    let api = Arc::new(GatedApi::new(vec![detailed]));
    let mut app = make_app(api, Route::Show(3));
    settle(&mut app).await;

    let text = screen(&app);
    assert!(text.contains("Item Details"));
    assert!(text.contains("third item"));
    assert!(text.contains("Created By:"));
    assert!(text.contains("tester"));
    assert!(text.contains("Updated At:"));
}

#[tokio::test]
async fn test_show_missing_item_renders_error() {
    let mut app = make_app(Arc::new(GatedApi::new(Vec::new())), Route::Show(9));
    settle(&mut app).await;

    assert!(screen(&app).contains("Request failed with status code 404"));
}

#[tokio::test]
async fn test_show_loading_state() {
    let api = Arc::new(GatedApi::new(vec![item(4, "Delta")]));
    let _gate = api.gate(4);
    let app = make_app(api, Route::Show(4));

    assert!(screen(&app).contains("Loading item..."));
}

#[tokio::test]
async fn test_ctrl_c_quits_from_any_screen() {
    let mut app = make_app(Arc::new(GatedApi::new(Vec::new())), Route::Create);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

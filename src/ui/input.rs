use crate::model::ItemId;
use crate::router::Route;
use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.confirm_delete().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete_accept(),
            KeyCode::Char('n') | KeyCode::Esc => app.confirm_delete_cancel(),
            _ => {}
        }
        return;
    }

    match app.route() {
        Route::List => handle_list_key(app, key),
        Route::Show(id) => handle_show_key(app, key, id),
        Route::Create | Route::Edit(_) => handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('v') => app.show_selected(),
        KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('c') | KeyCode::Char('n') => app.navigate(Route::Create),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_show_key(app: &mut App, key: KeyEvent, id: ItemId) {
    match key.code {
        KeyCode::Char('e') => app.navigate(Route::Edit(id)),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.form_input(FormIntent::NextField)
        }
        KeyCode::Backspace => app.form_input(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(FormIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

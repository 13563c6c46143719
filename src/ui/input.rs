use crate::phonebook::{Confirm, Effect};
use crate::ui::app::App;
use crate::ui::focus::{Field, FocusIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the app; confirm prompts go through `confirm`.
pub fn handle_key(app: &mut App, key: KeyEvent, confirm: &mut dyn Confirm) -> Vec<Effect> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return Vec::new();
    }

    match key.code {
        KeyCode::Tab => {
            app.dispatch_focus(FocusIntent::Next);
            return Vec::new();
        }
        KeyCode::BackTab => {
            app.dispatch_focus(FocusIntent::Previous);
            return Vec::new();
        }
        _ => {}
    }

    match app.focus().field {
        Field::List => match key.code {
            KeyCode::Up => app.select_up(),
            KeyCode::Down => app.select_down(),
            KeyCode::Delete | KeyCode::Char('d') => return app.delete_selected(confirm),
            _ => {}
        },
        Field::Name | Field::Number => match key.code {
            KeyCode::Enter => return app.submit(confirm),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.type_char(ch)
            }
            _ => {}
        },
        Field::Filter => match key.code {
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.type_char(ch)
            }
            _ => {}
        },
    }

    Vec::new()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

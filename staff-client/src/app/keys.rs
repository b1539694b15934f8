//! Key handling
//!
//! Pure mapping from a key event to state changes plus an optional
//! [`Command`]; nothing here touches the network or the terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use super::{Command, DirectoryApp, Focus};

pub fn handle_key(app: &mut DirectoryApp, key: KeyEvent) -> Option<Command> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match app.focus {
        Focus::Table => table_key(app, key),
        Focus::NewForm | Focus::EditForm => form_key(app, key),
    }
}

fn table_key(app: &mut DirectoryApp, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('r') => return Some(Command::Refresh),
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => {
            return app
                .selected_employee()
                .map(|employee| Command::Delete(employee.id.clone()));
        }
        KeyCode::Char('a') | KeyCode::Tab => app.focus_new_form(),
        KeyCode::Char('x') => app.clear_error(),
        _ => {}
    }
    None
}

fn form_key(app: &mut DirectoryApp, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),
        KeyCode::Enter => {
            return Some(match app.focus {
                Focus::EditForm => Command::SubmitEdit,
                _ => Command::SubmitNew,
            });
        }
        KeyCode::Esc => match app.focus {
            Focus::EditForm => app.cancel_edit(),
            _ => app.focus_table(),
        },
        _ => {
            // 每次按键都写回草稿
            if app.input.handle_event(&Event::Key(key)).is_some() {
                app.store_input();
            }
        }
    }
    None
}

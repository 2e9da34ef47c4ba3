use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The error modal captures everything until dismissed.
    if app.has_error() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.clear_error();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => match app.focus() {
            Focus::Title | Focus::Amount => handle_form_key(app, key),
            Focus::Search => handle_search_key(app, key),
            Focus::List => handle_list_key(app, key),
        },
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.set_focus(Focus::List),
        _ => handle_edit_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::List),
        _ => handle_edit_key(app, key),
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(c)
        }
        KeyCode::Backspace => app.delete_back(),
        KeyCode::Delete => app.delete_forward(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => app.remove_selected(),
        KeyCode::Char('a') => app.set_focus(Focus::Title),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        App::new(Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    /// Valid form + no worker wired up forces the error modal open.
    fn app_with_error() -> App {
        let mut app = make_app();
        for c in "Flour".chars() {
            app.insert_char(c);
        }
        app.set_focus(Focus::Amount);
        app.insert_char('1');
        app.submit_form();
        assert!(app.has_error());
        app
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('F')));
        assert_eq!(app.title_field().text(), "F");

        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.amount_field().text(), "2");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.title_field().is_empty());
    }

    #[test]
    fn modal_swallows_keys_until_dismissed() {
        let mut app = app_with_error();
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(app.title_field().is_empty());
        assert!(app.has_error());

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.has_error());
    }

    #[test]
    fn enter_also_dismisses_the_modal() {
        let mut app = app_with_error();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.has_error());
    }

    #[test]
    fn ctrl_c_quits_even_with_the_modal_open() {
        let mut app = app_with_error();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn slash_jumps_from_list_to_search() {
        let mut app = make_app();
        app.set_focus(Focus::List);
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.focus(), Focus::Search);
    }

    #[test]
    fn q_quits_only_from_the_list() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.title_field().text(), "q");

        app.set_focus(Focus::List);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}

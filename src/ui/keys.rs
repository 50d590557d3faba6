//! # Key Handling
//!
//! Maps key presses to [`App`] state changes, one table per focused pane.
//! The event loop in `main.rs` only reads events and persists the theme.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::forms::SplitBillField;
use crate::ui::app::{App, Focus};

/// Side effects the event loop has to carry out after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    ThemeChanged(&'static str),
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Handled;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return KeyOutcome::Handled;
        }

        // Help modal swallows everything until closed
        if self.show_help {
            if matches!(key.code, KeyCode::Char('i') | KeyCode::Esc) {
                self.toggle_help();
            }
            return KeyOutcome::Handled;
        }

        match self.focus {
            Focus::FriendList => return self.handle_list_key(key),
            Focus::AddFriend => self.handle_add_friend_key(key),
            Focus::SplitBill => self.handle_split_bill_key(key),
            Focus::Prompt => self.handle_prompt_key(key),
        }
        KeyOutcome::Handled
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selection_at_cursor(),
            KeyCode::Char('a') => self.toggle_add_friend(),
            KeyCode::Char(':') => self.open_prompt(),
            KeyCode::Char('i') => self.toggle_help(),
            KeyCode::Char('t') => return KeyOutcome::ThemeChanged(self.next_theme()),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Esc => self.status = None,
            _ => {}
        }
        KeyOutcome::Handled
    }

    fn handle_add_friend_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::FriendList,
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Down | KeyCode::Up => self.add_friend_form.next_field(),
            KeyCode::Enter => self.submit_add_friend(),
            KeyCode::Backspace => self.add_friend_form.pop_char(),
            KeyCode::Char(c) => self.add_friend_form.push_char(c),
            _ => {}
        }
    }

    fn handle_split_bill_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::FriendList,
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Down => self.split_bill_form.next_field(),
            KeyCode::Up => self.split_bill_form.previous_field(),
            KeyCode::Enter => self.submit_split_bill(),
            KeyCode::Backspace => self.split_bill_form.pop_digit(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.split_bill_form.active == SplitBillField::Payer =>
            {
                self.split_bill_form.toggle_payer();
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    self.split_bill_form.push_digit(digit);
                }
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_prompt(),
            KeyCode::Enter => self.run_prompt(),
            KeyCode::Backspace => {
                self.prompt_input.pop();
            }
            KeyCode::Char(c) => self.prompt_input.push(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{register_default_actions, LocalBridge};
    use crate::ledger::{avatar, Directory, SequentialIds};
    use crate::ui::theme::Theme;

    fn app() -> App {
        let mut bridge = LocalBridge::new();
        register_default_actions(&mut bridge);
        App::new(
            Directory::sample(),
            Box::new(SequentialIds::starting_at(1)),
            bridge,
            avatar::DEFAULT_AVATAR_BASE.to_string(),
            Theme::default_theme().clone(),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> KeyOutcome {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_pane() {
        let mut app = app();
        app.open_prompt();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_key_reports_change() {
        let mut app = app();
        let outcome = press(&mut app, KeyCode::Char('t'));
        assert_eq!(outcome, KeyOutcome::ThemeChanged(app.theme.name));
        assert_ne!(app.theme.name, Theme::default_theme().name);
    }

    #[test]
    fn test_payer_toggle_only_on_payer_field() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::SplitBill);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.split_bill_form.payer, crate::forms::Payer::You);

        app.split_bill_form.active = SplitBillField::Payer;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.split_bill_form.payer, crate::forms::Payer::Friend);
    }

    #[test]
    fn test_prompt_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        for c in "helpx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.prompt_input, "help");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::FriendList);
        let status = app.status.clone().expect("help prints actions");
        assert!(status.text.contains("addFriend"));
    }
}

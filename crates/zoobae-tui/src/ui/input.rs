//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! navigation triggers, form edits and submissions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use zoobae_core::auth::credentials::{can_add_email_char, can_add_password_char};
use zoobae_core::{FlowKind, MainTab, Screen, Trigger};

use crate::app::{App, AppState, FormFocus};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // A modal alert takes every key until dismissed
    if app.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return Ok(false);
    }

    match app.nav.current() {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Login => handle_form_input(app, FlowKind::Login, key),
        Screen::Register => handle_form_input(app, FlowKind::Registration, key),
        Screen::MainTabs => handle_main_tabs_input(app, key),
    }

    Ok(false)
}

fn handle_welcome_input(app: &mut App, key: KeyEvent) {
    let count = app.welcome_buttons().len();
    match key.code {
        KeyCode::Down | KeyCode::Tab => {
            app.welcome_selection = (app.welcome_selection + 1) % count;
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.welcome_selection = (app.welcome_selection + count - 1) % count;
        }
        KeyCode::Enter => {
            if let Some(button) = app.welcome_buttons().get(app.welcome_selection) {
                app.navigate(button.trigger);
            }
        }
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

fn handle_form_input(app: &mut App, kind: FlowKind, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Down | KeyCode::Tab => {
            app.form_focus = app.form_focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.form_focus = app.form_focus.prev();
        }
        KeyCode::Enter => match app.form_focus {
            FormFocus::Email => app.form_focus = FormFocus::Password,
            FormFocus::Password => app.form_focus = FormFocus::Submit,
            FormFocus::Submit => app.submit(kind),
            FormFocus::Link => {
                let trigger = match kind {
                    FlowKind::Login => Trigger::RegisterLink,
                    FlowKind::Registration => Trigger::SignInLink,
                };
                app.navigate(trigger);
            }
        },
        KeyCode::Backspace => {
            let focus = app.form_focus;
            if let Some(fields) = app.flow_mut(kind).fields_mut() {
                match focus {
                    FormFocus::Email => {
                        fields.email.pop();
                    }
                    FormFocus::Password => {
                        fields.password.pop();
                    }
                    FormFocus::Submit | FormFocus::Link => {}
                }
            }
        }
        KeyCode::Char(c) => {
            let focus = app.form_focus;
            // Fields are locked while the request is in flight
            if let Some(fields) = app.flow_mut(kind).fields_mut() {
                match focus {
                    FormFocus::Email => {
                        if can_add_email_char(fields.email.chars().count(), c) {
                            fields.email.push(c);
                        }
                    }
                    FormFocus::Password => {
                        if can_add_password_char(fields.password.chars().count(), c) {
                            fields.password.push(c);
                        }
                    }
                    FormFocus::Submit | FormFocus::Link => {}
                }
            }
        }
        _ => {}
    }
}

fn handle_main_tabs_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::BackTab => app.nav.prev_tab(),
        KeyCode::Right | KeyCode::Tab => app.nav.next_tab(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(tab) = c
                .to_digit(10)
                .and_then(|d| MainTab::from_position(d as usize))
            {
                app.nav.select_tab(tab);
            }
        }
        // MainTabs is the hub after login; leaving it means quitting
        KeyCode::Char('q') | KeyCode::Esc => app.state = AppState::ConfirmingQuit,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use zoobae_core::{Config, FlowPhase, SessionRequestResult, WelcomeView};

    use crate::app::Alert;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            handle_input(app, key(*code)).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, &[KeyCode::Char(c)]);
        }
    }

    fn test_app() -> App {
        App::new(Config::default(), None).unwrap()
    }

    #[test]
    fn test_welcome_to_login_via_keys() {
        let mut app = test_app();
        // Select "Sign In", then "Sign in with email"
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.nav.welcome_view(), WelcomeView::SignIn);
        assert_eq!(app.nav.current(), Screen::Welcome);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.nav.current(), Screen::Login);
    }

    #[test]
    fn test_welcome_create_account() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.nav.current(), Screen::Register);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.nav.current(), Screen::Welcome);
    }

    #[test]
    fn test_typing_into_form_fields() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Enter]);
        type_text(&mut app, "a@b.comm");
        press(&mut app, &[KeyCode::Backspace, KeyCode::Tab]);
        type_text(&mut app, "x");

        assert_eq!(app.register.credentials().email, "a@b.com");
        assert_eq!(app.register.credentials().password, "x");
    }

    #[test]
    fn test_form_link_switches_screen() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.nav.current(), Screen::Login);

        // Email -> Password -> Submit -> Link
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(app.nav.current(), Screen::Register);
        // Login was replaced, so back returns to Welcome
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.nav.current(), Screen::Welcome);
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Enter]);
        app.raise_alert(Alert::Failure {
            kind: FlowKind::Registration,
            message: "Unknown error".to_string(),
        });

        type_text(&mut app, "abc");
        assert_eq!(app.register.credentials().email, "");
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.alert().is_none());
        assert_eq!(app.nav.current(), Screen::Register);
    }

    #[test]
    fn test_fields_locked_while_submitting() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Enter]);
        type_text(&mut app, "a@b.com");
        app.register.begin().unwrap();

        type_text(&mut app, "zzz");
        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.register.credentials().email, "a@b.com");
        assert_eq!(app.register.phase(), &FlowPhase::Submitting);
    }

    #[test]
    fn test_main_tabs_selection() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        app.login.begin().unwrap();
        app.login.finish(SessionRequestResult::Success, &mut app.nav);
        assert_eq!(app.nav.current(), Screen::MainTabs);

        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.nav.main_tab(), MainTab::Tbd);
        press(&mut app, &[KeyCode::Char('5')]);
        assert_eq!(app.nav.main_tab(), MainTab::Profile);
        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.nav.main_tab(), MainTab::Profile);
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.nav.main_tab(), MainTab::Messages);
    }

    #[test]
    fn test_esc_on_main_tabs_asks_to_quit() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        app.login.begin().unwrap();
        app.login.finish(SessionRequestResult::Success, &mut app.nav);

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.state, AppState::ConfirmingQuit);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.nav.current(), Screen::MainTabs);
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.state, AppState::ConfirmingQuit);
        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.state, AppState::Normal);

        press(&mut app, &[KeyCode::Esc]);
        assert!(handle_input(&mut app, key(KeyCode::Char('y'))).unwrap());
        assert_eq!(app.state, AppState::Quitting);
    }
}

//! Application state management for the Zoobae shell.
//!
//! This module contains the `App` struct that owns the navigator, the two
//! form flows, the modal alert, and the channel that carries submission
//! results from background tasks back to the UI loop.

use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use zoobae_core::auth::REGISTRATION_CONFIRMATION;
use zoobae_core::{
    AuthClient, Config, FlowKind, FlowPhase, Navigator, Screen, SessionFlow,
    SessionRequestResult, Trigger, WelcomeView,
};

use crate::branding::Branding;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the submission result channel.
/// At most one request per form is ever outstanding.
const CHANNEL_BUFFER_SIZE: usize = 4;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ConfirmingQuit,
    Quitting,
}

/// Focus inside the login and register forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Email,
    Password,
    Submit,
    Link,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            FormFocus::Email => FormFocus::Password,
            FormFocus::Password => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Link,
            FormFocus::Link => FormFocus::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormFocus::Email => FormFocus::Link,
            FormFocus::Password => FormFocus::Email,
            FormFocus::Submit => FormFocus::Password,
            FormFocus::Link => FormFocus::Submit,
        }
    }
}

/// A welcome-screen button and the trigger it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeButton {
    pub label: &'static str,
    pub trigger: Trigger,
}

const WELCOME_DEFAULT_BUTTONS: [WelcomeButton; 2] = [
    WelcomeButton {
        label: "Create Account",
        trigger: Trigger::CreateAccount,
    },
    WelcomeButton {
        label: "Sign In",
        trigger: Trigger::ShowSignIn,
    },
];

const WELCOME_SIGN_IN_BUTTONS: [WelcomeButton; 2] = [
    WelcomeButton {
        label: "Sign in with email",
        trigger: Trigger::SignInWithEmail,
    },
    WelcomeButton {
        label: "Back",
        trigger: Trigger::HideSignIn,
    },
];

/// Modal notification. While one is showing, it takes all input.
/// Alerts raised together are shown one after another in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Failure { kind: FlowKind, message: String },
    RegistrationConfirmed,
}

impl Alert {
    pub fn title(&self) -> &str {
        match self {
            Alert::Failure { kind, .. } => kind.failure_title(),
            Alert::RegistrationConfirmed => REGISTRATION_CONFIRMATION.0,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Alert::Failure { message, .. } => message,
            Alert::RegistrationConfirmed => REGISTRATION_CONFIRMATION.1,
        }
    }
}

/// A finished submission, sent from the background task to the UI loop
#[derive(Debug)]
struct FlowOutcome {
    kind: FlowKind,
    result: SessionRequestResult,
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    // Core services
    pub config: Config,
    config_path: Option<PathBuf>,
    client: AuthClient,

    // Navigation and forms
    pub nav: Navigator,
    pub login: SessionFlow,
    pub register: SessionFlow,
    pub form_focus: FormFocus,
    pub welcome_selection: usize,

    // UI State
    pub state: AppState,
    alerts: VecDeque<Alert>,
    pub branding: Branding,
    branding_screen: Screen,

    // Background task channel
    outcome_rx: mpsc::Receiver<FlowOutcome>,
    outcome_tx: mpsc::Sender<FlowOutcome>,
}

impl App {
    /// Create a new application instance.
    ///
    /// `config_path` is where the last used email is remembered; `None`
    /// keeps configuration changes in memory only.
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Result<Self> {
        let client = AuthClient::from_config(&config)?;
        debug!(base_url = client.base_url(), "Auth client configured");

        let last_email = config.last_email.clone().unwrap_or_default();
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            config,
            config_path,
            client,

            nav: Navigator::new(),
            login: SessionFlow::with_email(FlowKind::Login, last_email),
            register: SessionFlow::new(FlowKind::Registration),
            form_focus: FormFocus::Email,
            welcome_selection: 0,

            state: AppState::Normal,
            alerts: VecDeque::new(),
            branding: Branding::new(),
            branding_screen: Screen::Welcome,

            outcome_rx: rx,
            outcome_tx: tx,
        })
    }

    pub fn flow(&self, kind: FlowKind) -> &SessionFlow {
        match kind {
            FlowKind::Login => &self.login,
            FlowKind::Registration => &self.register,
        }
    }

    pub fn flow_mut(&mut self, kind: FlowKind) -> &mut SessionFlow {
        match kind {
            FlowKind::Login => &mut self.login,
            FlowKind::Registration => &mut self.register,
        }
    }

    /// The form shown on the active screen, if it has one
    pub fn active_form(&self) -> Option<FlowKind> {
        match self.nav.current() {
            Screen::Login => Some(FlowKind::Login),
            Screen::Register => Some(FlowKind::Registration),
            Screen::Welcome | Screen::MainTabs => None,
        }
    }

    /// The alert currently on screen
    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Queue an alert behind any that are still waiting
    pub fn raise_alert(&mut self, alert: Alert) {
        debug!(title = alert.title(), pending = self.alerts.len(), "Alert raised");
        self.alerts.push_back(alert);
    }

    pub fn welcome_buttons(&self) -> &'static [WelcomeButton] {
        match self.nav.welcome_view() {
            WelcomeView::Default => &WELCOME_DEFAULT_BUTTONS,
            WelcomeView::SignIn => &WELCOME_SIGN_IN_BUTTONS,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Fire a navigation trigger from a user action
    pub fn navigate(&mut self, trigger: Trigger) {
        match self.nav.apply(trigger) {
            Ok(screen) => {
                debug!(%screen, "Navigation applied");
                self.on_navigation();
            }
            Err(e) => debug!(error = %e, "Ignoring navigation trigger"),
        }
    }

    /// Back gesture. On the root screen this asks to quit instead.
    pub fn go_back(&mut self) {
        if self.nav.current() == Screen::Welcome && self.nav.welcome_view() == WelcomeView::SignIn
        {
            self.navigate(Trigger::HideSignIn);
        } else if self.nav.back() {
            self.on_navigation();
        } else {
            self.state = AppState::ConfirmingQuit;
        }
    }

    fn on_navigation(&mut self) {
        self.form_focus = FormFocus::Email;
        self.welcome_selection = 0;
        self.sync_branding();
    }

    /// Give a newly active screen its own branding
    fn sync_branding(&mut self) {
        let current = self.nav.current();
        if current != self.branding_screen {
            self.branding = Branding::new();
            self.branding_screen = current;
        }
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submit a form in the background. A form that is already in flight
    /// rejects the request.
    pub fn submit(&mut self, kind: FlowKind) {
        let credentials = match self.flow_mut(kind).begin() {
            Ok(credentials) => credentials,
            Err(e) => {
                debug!(flow = ?kind, error = %e, "Submit rejected");
                return;
            }
        };

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = kind.send(&client, &credentials).await;
            if let Err(e) = tx.send(FlowOutcome { kind, result }).await {
                warn!(error = %e, "Failed to deliver submission result");
            }
        });
    }

    /// Apply any finished submissions. Called once per UI loop iteration.
    pub fn check_background_tasks(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome.kind, outcome.result);
        }
    }

    fn apply_outcome(&mut self, kind: FlowKind, result: SessionRequestResult) {
        let succeeded = result.is_success();
        let flow = match kind {
            FlowKind::Login => &mut self.login,
            FlowKind::Registration => &mut self.register,
        };
        flow.finish(result, &mut self.nav);

        match flow.phase().clone() {
            FlowPhase::Failed { message } => {
                self.raise_alert(Alert::Failure { kind, message });
            }
            FlowPhase::AwaitingAcknowledgement => {
                self.raise_alert(Alert::RegistrationConfirmed);
            }
            _ => {}
        }

        // A login that lands after the user left the form changes nothing here
        if succeeded && kind == FlowKind::Login && self.nav.current() == Screen::MainTabs {
            self.remember_email();
            self.on_navigation();
        }
    }

    /// Keep the email of the last successful login for next launch.
    /// Only `last_email` is written back; overrides stay in memory.
    fn remember_email(&mut self) {
        let email = self.login.credentials().email.clone();
        self.config.last_email = Some(email.clone());

        if let Some(ref path) = self.config_path {
            let mut stored = Config::load_from(path).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to reload config, rewriting defaults");
                Config::default()
            });
            stored.last_email = Some(email);
            if let Err(e) = stored.save_to(path) {
                warn!(error = %e, "Failed to save config");
            }
        }
    }

    /// Close the modal alert and carry out what it was waiting for
    pub fn dismiss_alert(&mut self) {
        match self.alerts.pop_front() {
            Some(Alert::Failure { kind, .. }) => {
                self.flow_mut(kind).dismiss_error();
            }
            Some(Alert::RegistrationConfirmed) => {
                match self.register.acknowledge(&mut self.nav) {
                    Ok(()) => info!("Registration acknowledged"),
                    Err(e) => warn!(error = %e, "Registration acknowledgement rejected"),
                }
                self.on_navigation();
            }
            None => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(Config::default(), None).unwrap()
    }

    fn failure(message: &str) -> SessionRequestResult {
        SessionRequestResult::Failure {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_form_focus_cycle() {
        assert_eq!(FormFocus::Email.next(), FormFocus::Password);
        assert_eq!(FormFocus::Link.next(), FormFocus::Email); // Wraps around
        assert_eq!(FormFocus::Email.prev(), FormFocus::Link);
        assert_eq!(FormFocus::Submit.prev(), FormFocus::Password);
    }

    #[test]
    fn test_login_prefilled_from_config() {
        let config = Config {
            last_email: Some("me@example.com".to_string()),
            ..Config::default()
        };
        let app = App::new(config, None).unwrap();
        assert_eq!(app.login.credentials().email, "me@example.com");
        assert_eq!(app.register.credentials().email, "");
    }

    #[test]
    fn test_bad_base_url_fails_startup() {
        let config = Config {
            api_base_url: "nope".to_string(),
            ..Config::default()
        };
        assert!(App::new(config, None).is_err());
    }

    #[test]
    fn test_welcome_buttons_follow_view() {
        let mut app = test_app();
        assert_eq!(app.welcome_buttons()[0].label, "Create Account");
        app.navigate(Trigger::ShowSignIn);
        assert_eq!(app.welcome_buttons()[0].label, "Sign in with email");
        app.go_back();
        assert_eq!(app.nav.welcome_view(), WelcomeView::Default);
        assert_eq!(app.nav.current(), Screen::Welcome);
    }

    #[test]
    fn test_go_back_on_root_asks_to_quit() {
        let mut app = test_app();
        app.go_back();
        assert_eq!(app.state, AppState::ConfirmingQuit);
    }

    #[test]
    fn test_login_failure_raises_alert_then_clears() {
        let mut app = test_app();
        app.navigate(Trigger::ShowSignIn);
        app.navigate(Trigger::SignInWithEmail);
        app.login.begin().unwrap();

        app.apply_outcome(FlowKind::Login, failure("Invalid credentials"));

        assert_eq!(app.nav.current(), Screen::Login);
        let alert = app.alert().cloned().unwrap();
        assert_eq!(alert.title(), "Login failed");
        assert_eq!(alert.body(), "Invalid credentials");

        app.dismiss_alert();
        assert!(app.alert().is_none());
        assert_eq!(app.login.phase(), &FlowPhase::Idle);
    }

    #[test]
    fn test_login_success_remembers_email() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut app = App::new(Config::default(), Some(path.clone())).unwrap();
        app.navigate(Trigger::ShowSignIn);
        app.navigate(Trigger::SignInWithEmail);
        app.login.fields_mut().unwrap().email = "a@b.com".to_string();
        app.login.begin().unwrap();

        app.apply_outcome(FlowKind::Login, SessionRequestResult::Success);

        assert_eq!(app.nav.current(), Screen::MainTabs);
        assert!(app.alert().is_none());
        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.last_email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_registration_confirmation_then_login() {
        let mut app = test_app();
        app.navigate(Trigger::CreateAccount);
        app.register.begin().unwrap();

        app.apply_outcome(FlowKind::Registration, SessionRequestResult::Success);
        assert_eq!(app.alert(), Some(&Alert::RegistrationConfirmed));
        assert_eq!(app.nav.current(), Screen::Register);

        app.dismiss_alert();
        assert_eq!(app.nav.current(), Screen::Login);
        app.go_back();
        assert_eq!(app.nav.current(), Screen::Register);
    }

    #[test]
    fn test_registration_confirmation_survives_login_failure() {
        let mut app = test_app();
        app.navigate(Trigger::ShowSignIn);
        app.navigate(Trigger::SignInWithEmail);
        app.login.begin().unwrap();
        app.navigate(Trigger::RegisterLink);
        app.register.begin().unwrap();

        app.apply_outcome(FlowKind::Registration, SessionRequestResult::Success);
        app.apply_outcome(FlowKind::Login, failure("Invalid credentials"));
        assert_eq!(app.alert(), Some(&Alert::RegistrationConfirmed));

        app.dismiss_alert();
        assert_eq!(app.nav.current(), Screen::Login);
        assert_eq!(app.register.phase(), &FlowPhase::Completed);
        assert_eq!(
            app.alert().map(|a| a.body().to_string()),
            Some("Invalid credentials".to_string())
        );

        app.dismiss_alert();
        assert!(app.alert().is_none());
        assert_eq!(app.login.phase(), &FlowPhase::Idle);
        assert!(app.register.begin().is_ok());
    }

    #[test]
    fn test_late_login_success_leaves_current_form_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut app = App::new(Config::default(), Some(path.clone())).unwrap();
        app.navigate(Trigger::ShowSignIn);
        app.navigate(Trigger::SignInWithEmail);
        app.login.fields_mut().unwrap().email = "a@b.com".to_string();
        app.login.begin().unwrap();
        app.navigate(Trigger::RegisterLink);
        app.form_focus = FormFocus::Password;

        app.apply_outcome(FlowKind::Login, SessionRequestResult::Success);

        assert_eq!(app.nav.current(), Screen::Register);
        assert_eq!(app.form_focus, FormFocus::Password);
        assert_eq!(app.config.last_email, None);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_ignored() {
        // Unroutable port: the request fails, but only after both submits
        let config = Config {
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        let mut app = App::new(config, None).unwrap();
        app.navigate(Trigger::ShowSignIn);
        app.navigate(Trigger::SignInWithEmail);

        app.submit(FlowKind::Login);
        assert!(app.login.is_busy());
        app.submit(FlowKind::Login);
        assert!(app.login.is_busy());

        let outcome = app.outcome_rx.recv().await.unwrap();
        app.apply_outcome(outcome.kind, outcome.result);
        assert!(app.outcome_rx.try_recv().is_err());
        assert_eq!(
            app.alert().map(|a| a.body().to_string()),
            Some("Unknown error".to_string())
        );
    }
}

//! Screen navigation for the app shell.
//!
//! The navigator keeps a history stack whose top is the single active
//! screen. Transitions either push (the previous screen stays reachable
//! with `back`) or replace (the previous screen is discarded).

use std::fmt;

use thiserror::Error;
use tracing::debug;

// ============================================================================
// Screens
// ============================================================================

/// Top-level screens in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Login,
    Register,
    MainTabs,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::MainTabs => "MainTabs",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Local toggle on the Welcome screen. Not a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeView {
    #[default]
    Default,
    SignIn,
}

/// Tabs inside the MainTabs hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Discover,
    Tbd,
    MatchAi,
    Messages,
    Profile,
}

impl MainTab {
    pub const ALL: [MainTab; 5] = [
        MainTab::Discover,
        MainTab::Tbd,
        MainTab::MatchAi,
        MainTab::Messages,
        MainTab::Profile,
    ];

    /// Get the display title for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            MainTab::Discover => "Discover",
            MainTab::Tbd => "TBD",
            MainTab::MatchAi => "Match-AI",
            MainTab::Messages => "Messages",
            MainTab::Profile => "Profile",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            MainTab::Discover => MainTab::Tbd,
            MainTab::Tbd => MainTab::MatchAi,
            MainTab::MatchAi => MainTab::Messages,
            MainTab::Messages => MainTab::Profile,
            MainTab::Profile => MainTab::Discover,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            MainTab::Discover => MainTab::Profile,
            MainTab::Tbd => MainTab::Discover,
            MainTab::MatchAi => MainTab::Tbd,
            MainTab::Messages => MainTab::MatchAi,
            MainTab::Profile => MainTab::Messages,
        }
    }

    /// Tab for a 1-based position, as used by the number keys.
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

// ============================================================================
// Transitions
// ============================================================================

/// Everything that can ask the navigator to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Welcome: "Create Account"
    CreateAccount,
    /// Welcome: "Sign In" reveals the sign-in options
    ShowSignIn,
    /// Welcome (sign-in view): "Sign in with email"
    SignInWithEmail,
    /// Welcome (sign-in view): "Back"
    HideSignIn,
    /// Login flow finished with a 2xx response
    LoginSucceeded,
    /// Login: "Don't have an account? Register"
    RegisterLink,
    /// Register flow succeeded and the user dismissed the confirmation
    RegistrationAcknowledged,
    /// Register: "Already have an account? Sign in"
    SignInLink,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigger::CreateAccount => "create-account",
            Trigger::ShowSignIn => "show-sign-in",
            Trigger::SignInWithEmail => "sign-in-with-email",
            Trigger::HideSignIn => "hide-sign-in",
            Trigger::LoginSucceeded => "login-succeeded",
            Trigger::RegisterLink => "register-link",
            Trigger::RegistrationAcknowledged => "registration-acknowledged",
            Trigger::SignInLink => "sign-in-link",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Trigger {trigger} is not valid on screen {from}")]
    InvalidTransition { from: Screen, trigger: Trigger },
}

/// What a valid trigger does to the stack
enum Step {
    Push(Screen),
    Replace(Screen),
    Toggle(WelcomeView),
}

// ============================================================================
// Navigator
// ============================================================================

#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Screen>,
    welcome_view: WelcomeView,
    main_tab: MainTab,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the Welcome screen with nothing behind it
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Welcome],
            welcome_view: WelcomeView::Default,
            main_tab: MainTab::Discover,
        }
    }

    /// The single active screen
    pub fn current(&self) -> Screen {
        self.history.last().copied().unwrap_or(Screen::Welcome)
    }

    /// Screens from the root up to and including the active one
    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn welcome_view(&self) -> WelcomeView {
        self.welcome_view
    }

    pub fn main_tab(&self) -> MainTab {
        self.main_tab
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Pop the active screen. Returns false on the root screen.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let left = self.history.pop();
        debug!(from = ?left, to = %self.current(), "Navigated back");
        true
    }

    /// Apply a trigger from the transition table.
    ///
    /// Returns the active screen afterwards. Triggers that are not valid on
    /// the current screen (or the current Welcome sub-view) leave the state
    /// untouched.
    pub fn apply(&mut self, trigger: Trigger) -> Result<Screen, NavigationError> {
        let from = self.current();
        let step = match (from, self.welcome_view, trigger) {
            (Screen::Welcome, WelcomeView::Default, Trigger::CreateAccount) => {
                Step::Push(Screen::Register)
            }
            (Screen::Welcome, WelcomeView::Default, Trigger::ShowSignIn) => {
                Step::Toggle(WelcomeView::SignIn)
            }
            (Screen::Welcome, WelcomeView::SignIn, Trigger::SignInWithEmail) => {
                Step::Push(Screen::Login)
            }
            (Screen::Welcome, WelcomeView::SignIn, Trigger::HideSignIn) => {
                Step::Toggle(WelcomeView::Default)
            }
            (Screen::Login, _, Trigger::LoginSucceeded) => Step::Replace(Screen::MainTabs),
            (Screen::Login, _, Trigger::RegisterLink) => Step::Replace(Screen::Register),
            (Screen::Register, _, Trigger::RegistrationAcknowledged) => Step::Push(Screen::Login),
            (Screen::Register, _, Trigger::SignInLink) => Step::Push(Screen::Login),
            _ => return Err(NavigationError::InvalidTransition { from, trigger }),
        };

        match step {
            Step::Push(to) => {
                self.history.push(to);
                debug!(%from, %to, %trigger, "Pushed screen");
            }
            Step::Replace(to) => {
                if let Some(top) = self.history.last_mut() {
                    *top = to;
                }
                debug!(%from, %to, %trigger, "Replaced screen");
            }
            Step::Toggle(view) => {
                self.welcome_view = view;
                debug!(?view, %trigger, "Toggled welcome view");
            }
        }

        Ok(self.current())
    }

    pub fn select_tab(&mut self, tab: MainTab) {
        self.main_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.main_tab = self.main_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.main_tab = self.main_tab.prev();
    }
}

// ============================================================================
// Tests
// ============================================================================

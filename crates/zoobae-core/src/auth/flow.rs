//! Submit lifecycle for the login and registration forms.
//!
//! A `SessionFlow` owns one form's credentials and phase. The phase is the
//! in-flight guard: while a request is outstanding, `begin` refuses to start
//! another one.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──finish(Failure)──▶ Failed ──begin──▶ ...
//!                      │
//!                      └─finish(Success)─▶ Completed                (login)
//!                      └─finish(Success)─▶ AwaitingAcknowledgement
//!                                             └─acknowledge─▶ Completed (registration)
//! ```

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiError, AuthClient};
use crate::navigation::{Navigator, Screen, Trigger};

use super::Credentials;

/// Which form a flow belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Login,
    Registration,
}

impl FlowKind {
    /// Screen hosting this form
    pub fn screen(&self) -> Screen {
        match self {
            FlowKind::Login => Screen::Login,
            FlowKind::Registration => Screen::Register,
        }
    }

    /// Submit button label
    pub fn action_label(&self) -> &'static str {
        match self {
            FlowKind::Login => "Login",
            FlowKind::Registration => "Register",
        }
    }

    /// Submit button label while a request is outstanding
    pub fn busy_label(&self) -> &'static str {
        match self {
            FlowKind::Login => "Logging in...",
            FlowKind::Registration => "Registering...",
        }
    }

    /// Title of the alert raised on failure
    pub fn failure_title(&self) -> &'static str {
        match self {
            FlowKind::Login => "Login failed",
            FlowKind::Registration => "Registration failed",
        }
    }

    /// Send one request for this kind of flow and interpret the response.
    pub async fn send(&self, client: &AuthClient, credentials: &Credentials) -> SessionRequestResult {
        let result = match self {
            FlowKind::Login => client.login(credentials).await,
            FlowKind::Registration => client.register(credentials).await,
        };
        if let Err(ref e) = result {
            warn!(flow = ?self, status = ?e.status(), error = %e, "Submission failed");
        }
        SessionRequestResult::from(result)
    }
}

/// Title and body of the confirmation shown after registering
pub const REGISTRATION_CONFIRMATION: (&str, &str) =
    ("Registration successful", "You can now log in.");

/// Outcome of one submission. The success body is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRequestResult {
    Success,
    Failure { message: String },
}

impl SessionRequestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SessionRequestResult::Success)
    }
}

impl From<Result<(), ApiError>> for SessionRequestResult {
    fn from(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => SessionRequestResult::Success,
            Err(e) => SessionRequestResult::Failure {
                message: e.user_message(),
            },
        }
    }
}

/// Send a login request (multipart form) for `email`/`password`.
pub async fn submit_login(client: &AuthClient, email: &str, password: &str) -> SessionRequestResult {
    FlowKind::Login
        .send(client, &Credentials::new(email, password))
        .await
}

/// Send a registration request (JSON body) for `email`/`password`.
pub async fn submit_registration(
    client: &AuthClient,
    email: &str,
    password: &str,
) -> SessionRequestResult {
    FlowKind::Registration
        .send(client, &Credentials::new(email, password))
        .await
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting,
    /// Last attempt failed; a new submission is allowed right away.
    Failed { message: String },
    /// Registration succeeded and the confirmation is showing.
    AwaitingAcknowledgement,
    Completed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("The confirmation must be acknowledged first")]
    AwaitingAcknowledgement,

    #[error("Nothing to acknowledge")]
    NotAwaitingAcknowledgement,
}

#[derive(Debug, Clone)]
pub struct SessionFlow {
    kind: FlowKind,
    credentials: Credentials,
    phase: FlowPhase,
}

impl SessionFlow {
    pub fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            credentials: Credentials::default(),
            phase: FlowPhase::Idle,
        }
    }

    /// Start with the email field prefilled
    pub fn with_email(kind: FlowKind, email: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(email, String::new()),
            ..Self::new(kind)
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn phase(&self) -> &FlowPhase {
        &self.phase
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Editable fields, or `None` while a request is outstanding.
    pub fn fields_mut(&mut self) -> Option<&mut Credentials> {
        if self.is_busy() {
            None
        } else {
            Some(&mut self.credentials)
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FlowPhase::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FlowPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Submit button label for the current phase
    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            self.kind.busy_label()
        } else {
            self.kind.action_label()
        }
    }

    /// Enter `Submitting` and hand back the credentials to send.
    pub fn begin(&mut self) -> Result<Credentials, FlowError> {
        match self.phase {
            FlowPhase::Submitting => {
                debug!(flow = ?self.kind, "Ignoring submit while in flight");
                Err(FlowError::AlreadySubmitting)
            }
            FlowPhase::AwaitingAcknowledgement => Err(FlowError::AwaitingAcknowledgement),
            _ => {
                self.phase = FlowPhase::Submitting;
                debug!(flow = ?self.kind, "Submission started");
                Ok(self.credentials.clone())
            }
        }
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// A successful login replaces the Login screen with MainTabs. A
    /// successful registration waits for `acknowledge`. Failures keep the
    /// entered credentials and leave navigation alone. If the user has
    /// already left the form's screen, the phase is still updated but no
    /// transition is made.
    pub fn finish(&mut self, result: SessionRequestResult, nav: &mut Navigator) {
        if !self.is_busy() {
            warn!(flow = ?self.kind, "Result arrived with no submission in flight");
        }

        match result {
            SessionRequestResult::Success => match self.kind {
                FlowKind::Login => {
                    self.phase = FlowPhase::Completed;
                    info!("Login successful");
                    if nav.current() != self.kind.screen() {
                        debug!(screen = %nav.current(), "Login finished off-screen");
                    } else if let Err(e) = nav.apply(Trigger::LoginSucceeded) {
                        warn!(error = %e, "Login navigation rejected");
                    }
                }
                FlowKind::Registration => {
                    self.phase = FlowPhase::AwaitingAcknowledgement;
                    info!("Registration successful");
                }
            },
            SessionRequestResult::Failure { message } => {
                self.phase = FlowPhase::Failed { message };
            }
        }
    }

    /// The user dismissed the registration confirmation.
    pub fn acknowledge(&mut self, nav: &mut Navigator) -> Result<(), FlowError> {
        if self.phase != FlowPhase::AwaitingAcknowledgement {
            return Err(FlowError::NotAwaitingAcknowledgement);
        }
        self.phase = FlowPhase::Completed;
        if nav.current() != self.kind.screen() {
            debug!(screen = %nav.current(), "Registration acknowledged off-screen");
        } else if let Err(e) = nav.apply(Trigger::RegistrationAcknowledged) {
            warn!(error = %e, "Registration navigation rejected");
        }
        Ok(())
    }

    /// The user dismissed the failure alert.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, FlowPhase::Failed { .. }) {
            self.phase = FlowPhase::Idle;
        }
    }

    /// Run one full submission: guard, request, interpret, transition.
    pub async fn submit(
        &mut self,
        client: &AuthClient,
        nav: &mut Navigator,
    ) -> Result<SessionRequestResult, FlowError> {
        let credentials = self.begin()?;
        let result = self.kind.send(client, &credentials).await;
        self.finish(result.clone(), nav);
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

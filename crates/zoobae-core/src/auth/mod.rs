//! Authentication module for the session initiation flow.
//!
//! This module provides:
//! - `Credentials`: the email/password pair typed into a form
//! - `SessionFlow`: one login or registration form's submit lifecycle
//!
//! Credentials live only in memory and are sent in exactly one request
//! per submission.

pub mod credentials;
pub mod flow;

pub use credentials::Credentials;
pub use flow::{
    submit_login, submit_registration, FlowError, FlowKind, FlowPhase, SessionFlow,
    SessionRequestResult, REGISTRATION_CONFIRMATION,
};

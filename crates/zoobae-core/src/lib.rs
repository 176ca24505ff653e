//! Core library for Zoobae.
//!
//! Everything here is independent of how screens are drawn:
//!
//! - `api`: HTTP client for the authentication backend
//! - `auth`: credentials and the session initiation flow
//! - `navigation`: the screen stack and its transition table
//! - `config`: persisted application settings

pub mod api;
pub mod auth;
pub mod config;
pub mod navigation;

pub use api::{ApiError, AuthClient};
pub use auth::{Credentials, FlowError, FlowKind, FlowPhase, SessionFlow, SessionRequestResult};
pub use config::Config;
pub use navigation::{MainTab, NavigationError, Navigator, Screen, Trigger, WelcomeView};

//! HTTP client module for the Zoobae authentication backend.
//!
//! This module provides the `AuthClient` for the two unauthenticated
//! calls the shell makes: login and registration.
//!
//! The backend answers failures with an optional JSON `detail` string,
//! which is what the user gets to see.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::ApiError;

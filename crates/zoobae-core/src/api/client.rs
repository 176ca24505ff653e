//! HTTP client for the Zoobae authentication backend.
//!
//! Login is posted as a multipart form, registration as JSON. Neither call
//! is retried and neither reads the success body.

use std::time::Duration;

use reqwest::{multipart, Client, Url};
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::config::Config;

use super::ApiError;

const LOGIN_PATH: &str = "login";
const REGISTER_PATH: &str = "register";

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the authentication backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client against `base_url`, using the transport's default timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, None)
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::build(
            &config.api_base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Submit credentials to `POST /login` as multipart form fields
    /// `username` and `password`.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.endpoint(LOGIN_PATH);
        debug!(url = %url, "Sending login request");

        let form = multipart::Form::new()
            .text("username", credentials.email.clone())
            .text("password", credentials.password.clone());

        let response = self.client.post(&url).multipart(form).send().await?;
        Self::check_response(response).await
    }

    /// Submit credentials to `POST /register` as a JSON body.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.endpoint(REGISTER_PATH);
        debug!(url = %url, "Sending registration request");

        let body = RegisterRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        Self::check_response(response).await
    }

    /// Check if response is successful, returning an error with the detail if not.
    async fn check_response(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            status = %status,
            body = %ApiError::truncate_body(&body),
            "Backend rejected request"
        );
        Err(ApiError::from_status(status, &body))
    }
}

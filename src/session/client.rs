//! HTTP clients for the backend `/users/*` endpoints.
//!
//! Every failure on this path is folded into a normalized value. Callers never
//! see a transport error; an unreachable backend reads as "not authenticated".

use super::{
    cookie::forward_cookie,
    types::{AuthenticationResult, Credentials, LoginOutcome, LoginRequest, LoginResponse},
};
use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};
use reqwest::Client;
use secrecy::ExposeSecret;
use std::{future::Future, time::Duration};
use tracing::{debug, instrument, warn};
use url::Url;

const AUTHENTICATE_PATH: &str = "users/authenticate";
const LOGIN_PATH: &str = "users/login";

/// Session operations the pages depend on.
pub trait SessionApi: Send + Sync + 'static {
    /// Verify the browser session carried in `headers`.
    fn check_session(
        &self,
        headers: &HeaderMap,
    ) -> impl Future<Output = AuthenticationResult> + Send;

    /// Submit credentials, forwarding the browser `cookie` header value.
    fn login(
        &self,
        credentials: &Credentials,
        cookie: &str,
    ) -> impl Future<Output = LoginOutcome> + Send;
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    api_base_url: Url,
    timeout: Option<Duration>,
}

impl BackendConfig {
    #[must_use]
    pub fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            timeout: None,
        }
    }

    /// `None` waits on the backend indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Debug, Clone)]
pub struct SessionClient {
    client: Client,
    authenticate_url: Url,
    login_url: Url,
}

impl SessionClient {
    /// Build the client and resolve the endpoint URLs once.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or an endpoint URL is invalid.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            authenticate_url: endpoint(&config.api_base_url, AUTHENTICATE_PATH)?,
            login_url: endpoint(&config.api_base_url, LOGIN_PATH)?,
        })
    }

    #[must_use]
    pub fn authenticate_url(&self) -> &Url {
        &self.authenticate_url
    }

    #[must_use]
    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    async fn fetch_authentication(&self, cookie: &str) -> reqwest::Result<AuthenticationResult> {
        self.client
            .get(self.authenticate_url.clone())
            .header(COOKIE, cookie)
            .send()
            .await?
            .error_for_status()?
            .json::<AuthenticationResult>()
            .await
    }
}

impl SessionApi for SessionClient {
    #[instrument(skip_all)]
    async fn check_session(&self, headers: &HeaderMap) -> AuthenticationResult {
        let cookie = forward_cookie(headers);

        match self.fetch_authentication(&cookie).await {
            Ok(result) => {
                debug!(success = result.success, "Session check completed");
                result
            }
            Err(err) => {
                debug!("Session check failed: {err}");
                AuthenticationResult::unauthenticated()
            }
        }
    }

    #[instrument(skip_all)]
    async fn login(&self, credentials: &Credentials, cookie: &str) -> LoginOutcome {
        let payload = LoginRequest {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        };

        let response = match self
            .client
            .post(self.login_url.clone())
            .header(COOKIE, cookie)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("Login request failed: {err}");
                return LoginOutcome::TransportError(err.to_string());
            }
        };

        let status = response.status();
        if status.is_server_error() {
            warn!("Login endpoint returned {status}");
            return LoginOutcome::TransportError(format!("backend returned {status}"));
        }
        if !status.is_success() {
            debug!("Login rejected with {status}");
            return LoginOutcome::InvalidCredentials;
        }

        let set_cookies: Vec<HeaderValue> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .cloned()
            .collect();

        match response.json::<LoginResponse>().await {
            Ok(LoginResponse { success: true }) => LoginOutcome::Success { set_cookies },
            Ok(LoginResponse { success: false }) => LoginOutcome::InvalidCredentials,
            Err(err) => {
                warn!("Login response could not be decoded: {err}");
                LoginOutcome::TransportError(err.to_string())
            }
        }
    }
}

/// Append `path` to the base URL, keeping any path prefix the base carries.
fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let joined = format!("{}/{path}", base.as_str().trim_end_matches('/'));
    Url::parse(&joined).with_context(|| format!("Invalid endpoint URL: {joined}"))
}

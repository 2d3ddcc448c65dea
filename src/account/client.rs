use crate::account::{
    types::{LoginRequest, RegisterRequest, ResetPasswordRequest, UsernameResponse},
    Error,
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info_span, Instrument};
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Upper bound on any single request, stalled connections included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn server_message(json_response: &Value) -> Option<String> {
    json_response
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

/// Normalize `url` to `scheme://host:port`, defaulting the port from the
/// scheme.
fn base_url(url: &str) -> Result<String, Error> {
    let url = Url::parse(url).map_err(|err| Error::Config(err.to_string()))?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| Error::Config("no host specified".to_string()))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(Error::Config(format!("unsupported scheme {scheme}"))),
        },
    };

    Ok(format!("{scheme}://{host}:{port}"))
}

/// Async client for the account service. Cheap to clone, safe to share.
#[derive(Clone, Debug)]
pub struct AccountClient {
    http: Client,
    base_url: String,
}

impl AccountClient {
    /// Build a client against `url`, e.g. `http://localhost:8000`.
    ///
    /// # Errors
    /// Returns an error if `url` cannot be parsed, has no host, or uses an
    /// unsupported scheme.
    pub fn new(url: &str) -> Result<Self, Error> {
        let base_url = base_url(url)?;

        debug!("account service base URL: {}", base_url);

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn reject(response: reqwest::Response) -> Error {
        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| server_message(&body));

        Error::Rejected {
            status: status.as_u16(),
            message,
        }
    }

    /// Authenticate `email` against the account service.
    ///
    /// The success body is acknowledgement data only; it is logged at
    /// debug and otherwise unused.
    ///
    /// # Errors
    /// Returns an error if the request fails or the service rejects the
    /// credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), Error> {
        let login_url = self.endpoint("/v1/user/login");

        let span = info_span!(
            "account.login",
            http.method = "POST",
            url = %login_url
        );
        let response = self
            .http
            .post(&login_url)
            .json(request)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        if let Ok(body) = response.json::<Value>().await {
            debug!(%body, "login acknowledged");
        }

        Ok(())
    }

    /// Create a new account.
    ///
    /// # Errors
    /// Returns an error if the request fails or the service rejects the
    /// registration.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), Error> {
        let register_url = self.endpoint("/v1/user/register");

        let span = info_span!(
            "account.register",
            http.method = "POST",
            url = %register_url
        );
        let response = self
            .http
            .post(&register_url)
            .json(request)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        Ok(())
    }

    /// Replace the password for `email`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the service rejects the
    /// reset.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), Error> {
        let reset_url = self.endpoint("/v1/user/reset-password");

        let span = info_span!(
            "account.reset_password",
            http.method = "POST",
            url = %reset_url
        );
        let response = self
            .http
            .post(&reset_url)
            .json(request)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        Ok(())
    }

    /// Look up the display name registered for `email`.
    ///
    /// # Errors
    /// Returns an error if the request fails, the service rejects the
    /// lookup, or the response is missing the username.
    pub async fn username(&self, email: &str) -> Result<String, Error> {
        let username_url = self.endpoint("/v1/user/get-username");

        let span = info_span!(
            "account.username",
            http.method = "GET",
            url = %username_url
        );
        let response = self
            .http
            .get(&username_url)
            .query(&[("email", email)])
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let body: UsernameResponse = response.json().await?;

        Ok(body.username)
    }
}

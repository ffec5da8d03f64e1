//! User API Client
//!
//! The create-request against the backend's user endpoint. The state layer
//! talks to the [`UserApi`] trait so tests and a misconfigured app can swap
//! the HTTP implementation out.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::constants::{ADD_USER_PATH, DEFAULT_API_BASE_URL, REQUEST_TIMEOUT_SECS};
use crate::domain::{NewUser, UserRecord};
use crate::error::{
    DecodeSnafu, Error, RejectedSnafu, Result, SubmissionError, TransportSnafu,
    UnavailableSnafu,
};
use crate::services::run_in_tokio;

/// Connection settings for the user API (the `[api]` table of the settings file)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL; `/addUser` is appended verbatim
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Also empty the inputs when a request fails
    pub clear_fields_on_failure: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            clear_fields_on_failure: false,
        }
    }
}

/// Backend operations used by the registration form
pub trait UserApi: Send + Sync {
    /// Ask the backend to persist `user` and return its canonical record
    fn create_user(&self, user: NewUser) -> BoxFuture<'_, Result<UserRecord, SubmissionError>>;
}

/// reqwest implementation of [`UserApi`]
#[derive(Clone, Debug)]
pub struct HttpUserApi {
    client: Client,
    endpoint: Url,
}

impl HttpUserApi {
    /// Build a client for the endpoint described by `settings`
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let endpoint = endpoint_url(&settings.base_url)?;
        if settings.timeout_secs == 0 {
            return Err(Error::Invalid {
                message: "API timeout_secs must be at least 1".to_string(),
            });
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::Invalid {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        tracing::info!(endpoint = %endpoint, timeout_secs = settings.timeout_secs, "User API ready");
        Ok(Self { client, endpoint })
    }

    /// Full URL of the create-request
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post_user(
        client: Client,
        endpoint: Url,
        user: NewUser,
    ) -> Result<UserRecord, SubmissionError> {
        let url = endpoint.to_string();

        let response = client
            .post(endpoint)
            .json(&user)
            .send()
            .await
            .context(TransportSnafu { url: &url })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return RejectedSnafu {
                status: status.as_u16(),
                body,
            }
            .fail();
        }

        response
            .json::<UserRecord>()
            .await
            .context(DecodeSnafu { url })
    }
}

impl UserApi for HttpUserApi {
    /// Runs the request on the shared tokio runtime
    fn create_user(&self, user: NewUser) -> BoxFuture<'_, Result<UserRecord, SubmissionError>> {
        let request = Self::post_user(self.client.clone(), self.endpoint.clone(), user);
        Box::pin(run_in_tokio(request))
    }
}

/// Stand-in used when the configured API cannot be built; every call fails
#[derive(Clone, Debug)]
pub struct UnavailableUserApi {
    reason: String,
}

impl UnavailableUserApi {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl UserApi for UnavailableUserApi {
    fn create_user(&self, _user: NewUser) -> BoxFuture<'_, Result<UserRecord, SubmissionError>> {
        let message = self.reason.clone();
        Box::pin(async move { UnavailableSnafu { message }.fail::<UserRecord>() })
    }
}

/// Join the base URL and the create path the way a string prefix would
fn endpoint_url(base_url: &str) -> Result<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), ADD_USER_PATH);
    Url::parse(&raw).map_err(|e| Error::Invalid {
        message: format!("Invalid API base URL {base_url:?}: {e}"),
    })
}

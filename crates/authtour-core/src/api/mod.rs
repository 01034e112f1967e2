//! HTTP client for the external authentication backend.
//!
//! All real work (password hashing, token issuance, persistence, email
//! delivery) happens server-side; this client only issues the requests and
//! classifies outcomes into the two-kind error taxonomy.

pub mod types;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use types::{
    DashboardResponse, ErrorBody, HealthResponse, LoginResponse, SignupAck, User, UsersResponse,
    VerifyAck,
};
use types::{CredentialsBody, VerifyEmailBody};

use crate::config::Config;

/// Failure taxonomy for backend calls.
///
/// Exactly two kinds: the backend answered with a non-success status and a
/// structured reason (shown verbatim), or the request never completed
/// (offline, DNS, refused connection, undecodable body). Nothing is fatal;
/// every failure is recoverable by resubmitting.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP response received, non-success, structured reason available.
    #[error("{detail}")]
    ServerRejected { status: u16, detail: String },

    /// The request could not be completed.
    #[error("Network error occurred")]
    TransportFailed {
        #[from]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Returns true for the transport-failure kind.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::TransportFailed { .. })
    }
}

/// Client for the authentication backend.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a client from configuration (env override applied).
    pub fn new(config: &Config) -> Self {
        Self::from_base_url(config.effective_api_base_url())
    }

    /// Creates a client against an explicit base URL.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/signup` — create an account awaiting email verification.
    pub async fn signup(&self, email: &str, password: &str) -> Result<SignupAck, ApiError> {
        self.post_json(
            "/api/signup",
            &CredentialsBody { email, password },
            "Signup failed",
        )
        .await
    }

    /// `POST /api/verify-email` — confirm the code sent to an address.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<VerifyAck, ApiError> {
        self.post_json(
            "/api/verify-email",
            &VerifyEmailBody {
                email,
                verification_code: code,
            },
            "Verification failed",
        )
        .await
    }

    /// `POST /api/login` — exchange credentials for an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json(
            "/api/login",
            &CredentialsBody { email, password },
            "Login failed",
        )
        .await
    }

    /// `GET /healthz` — backend liveness probe.
    pub async fn healthz(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("/healthz", None, "Health check failed").await
    }

    /// `GET /api/dashboard` — protected greeting for the logged-in user.
    pub async fn dashboard(&self, token: &str) -> Result<DashboardResponse, ApiError> {
        self.get_json("/api/dashboard", Some(token), "Request failed")
            .await
    }

    /// `GET /api/users` — registered users listing (demo-only endpoint).
    pub async fn list_users(&self) -> Result<UsersResponse, ApiError> {
        self.get_json("/api/users", None, "Request failed").await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(path, response, fallback).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Self::decode(path, response, fallback).await
    }

    /// Decodes a response, classifying non-success into `ServerRejected`.
    ///
    /// The fallback text stands in when the error body carries no detail,
    /// matching the per-operation fallbacks of the reference UI.
    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!(path, status = status.as_u16(), "backend call ok");
            Ok(response.json::<T>().await?)
        } else {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail_text())
                .unwrap_or_else(|| fallback.to_string());
            tracing::warn!(path, status = status.as_u16(), %detail, "backend rejected call");
            Err(ApiError::ServerRejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

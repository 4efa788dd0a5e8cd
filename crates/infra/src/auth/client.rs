//! HTTP client for the hosted authentication service.
//!
//! Thin pass-through to a Supabase-style REST surface: password sign-in,
//! sign-up, sign-out, and user-metadata updates for profile persistence.
//! Failures surface to the caller as generic auth/network errors; there is
//! no retry and no backoff.

use agendahub_core::AuthGateway;
use agendahub_domain::validation;
use agendahub_domain::{
    AgendaError, AuthConfig, Credentials, ProfileUpdate, Result, Session,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

/// Reqwest-backed implementation of the AuthGateway port
pub struct HostedAuthClient {
    http: Client,
    base_url: String,
    anon_key: String,
    session_tx: watch::Sender<Option<Session>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    email: String,
}

#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct MetadataUpdate<'a> {
    data: ProfileMetadata<'a>,
}

#[derive(Debug, Serialize)]
struct ProfileMetadata<'a> {
    full_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    timezone: &'a str,
    notifications: bool,
}

impl HostedAuthClient {
    /// Create a client for the configured auth endpoint.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| AgendaError::Network(format!("failed to build HTTP client: {e}")))?;
        let (session_tx, _) = watch::channel(None);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            session_tx,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_api_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.anon_key)
    }

    async fn exchange_credentials(
        &self,
        url: String,
        credentials: &Credentials,
    ) -> Result<Session> {
        let grant =
            PasswordGrant { email: &credentials.email, password: &credentials.password };
        let response = self
            .with_api_key(self.http.post(url))
            .json(&grant)
            .send()
            .await
            .map_err(|e| AgendaError::Network(format!("auth service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
            let detail = body
                .error_description
                .or(body.msg)
                .unwrap_or_else(|| format!("auth service returned {status}"));
            warn!(%status, "credential exchange rejected");
            return Err(AgendaError::Auth(detail));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AgendaError::Network(format!("malformed auth response: {e}")))?;

        let session = Session {
            display_name: Session::display_name_from_email(&token.user.email),
            user_id: token.user.id,
            email: token.user.email,
            access_token: token.access_token,
            expires_at: token.expires_at,
        };
        self.session_tx.send_replace(Some(session.clone()));
        info!(user_id = %session.user_id, "session established");
        Ok(session)
    }
}

#[async_trait]
impl AuthGateway for HostedAuthClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        validation::validate_credentials(&credentials.email, &credentials.password)?;
        self.exchange_credentials(
            self.endpoint("/auth/v1/token?grant_type=password"),
            credentials,
        )
        .await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Session> {
        validation::validate_credentials(&credentials.email, &credentials.password)?;
        self.exchange_credentials(self.endpoint("/auth/v1/signup"), credentials).await
    }

    async fn sign_out(&self) -> Result<()> {
        let token = self.current_session().map(|s| s.access_token);
        let mut request = self.with_api_key(self.http.post(self.endpoint("/auth/v1/logout")));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AgendaError::Network(format!("auth service unreachable: {e}")))?;
        if !response.status().is_success() {
            return Err(AgendaError::Auth(format!(
                "sign-out rejected: {}",
                response.status()
            )));
        }

        self.session_tx.send_replace(None);
        info!("session cleared");
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        validation::validate_profile(update)?;
        let session = self.current_session().ok_or_else(|| {
            AgendaError::Auth("You must be signed in to update your profile".into())
        })?;

        let metadata = MetadataUpdate {
            data: ProfileMetadata {
                full_name: &update.name,
                phone: update.phone.as_deref(),
                timezone: &update.timezone,
                notifications: update.notifications,
            },
        };

        let response = self
            .with_api_key(self.http.put(self.endpoint("/auth/v1/user")))
            .bearer_auth(&session.access_token)
            .json(&metadata)
            .send()
            .await
            .map_err(|e| AgendaError::Network(format!("auth service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
            let detail = body
                .error_description
                .or(body.msg)
                .unwrap_or_else(|| format!("profile update rejected: {status}"));
            return Err(AgendaError::Auth(detail));
        }

        info!(user_id = %session.user_id, "profile metadata updated");
        Ok(())
    }
}

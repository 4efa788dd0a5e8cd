//! Hosted-auth collaborator port.
//!
//! Authentication and profile persistence are delegated to an external
//! hosted service; the core only consumes this interface and never owns a
//! credential store of its own.

use agendahub_domain::{Credentials, ProfileUpdate, Result, Session};
use async_trait::async_trait;
use tokio::sync::watch;

/// Interface to the hosted authentication service
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session>;

    /// Register a new account and return its session.
    async fn sign_up(&self, credentials: &Credentials) -> Result<Session>;

    /// Terminate the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Currently authenticated session, if any.
    fn current_session(&self) -> Option<Session>;

    /// Session-change stream; `None` means signed out.
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;

    /// Persist profile fields to the hosted service.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()>;
}

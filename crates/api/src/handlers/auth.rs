//! Pass-through to the hosted auth collaborator

use std::sync::Arc;

use agendahub_domain::{Credentials, ProfileUpdate, Session};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiResult;
use crate::AppContext;

/// Exchange credentials for a session.
pub async fn sign_in(
    State(ctx): State<Arc<AppContext>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<Session>> {
    Ok(Json(ctx.auth.sign_in(&credentials).await?))
}

/// Register a new account.
pub async fn sign_up(
    State(ctx): State<Arc<AppContext>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<Session>> {
    Ok(Json(ctx.auth.sign_up(&credentials).await?))
}

/// Terminate the current session.
pub async fn sign_out(State(ctx): State<Arc<AppContext>>) -> ApiResult<StatusCode> {
    ctx.auth.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Currently authenticated identity, if any.
pub async fn get_session(State(ctx): State<Arc<AppContext>>) -> Json<Option<Session>> {
    Json(ctx.auth.current_session())
}

/// Delegate a profile update to the hosted service.
pub async fn update_profile(
    State(ctx): State<Arc<AppContext>>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<StatusCode> {
    ctx.auth.update_profile(&update).await?;
    Ok(StatusCode::NO_CONTENT)
}

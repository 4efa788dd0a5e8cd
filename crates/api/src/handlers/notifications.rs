//! Notification panel: list, read, dismiss, and the manual sweep trigger

use std::sync::Arc;

use agendahub_domain::{AgendaError, Notification};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub unread: usize,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub added: usize,
}

/// Current notification list with the unread badge count.
pub async fn list_notifications(
    State(ctx): State<Arc<AppContext>>,
) -> Json<NotificationListResponse> {
    let center = ctx.notifications.read();
    Json(NotificationListResponse { notifications: center.list(), unread: center.unread_count() })
}

/// Re-run the upcoming-meeting sweep against wall-clock now.
///
/// The reminder scheduler calls the same generator on a timer; this endpoint
/// is the render-cycle trigger.
pub async fn run_sweep(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<SweepResponse>> {
    let meetings = ctx.scheduling.list().await?;
    let now = Local::now().naive_local();
    let added = ctx.notifications.write().sweep(&meetings, now);
    Ok(Json(SweepResponse { added }))
}

/// Flag a notification as read.
pub async fn mark_read(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if ctx.notifications.write().mark_read(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AgendaError::NotFound(format!("notification {id}")).into())
    }
}

/// Dismiss a notification entirely.
pub async fn dismiss(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if ctx.notifications.write().dismiss(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AgendaError::NotFound(format!("notification {id}")).into())
    }
}

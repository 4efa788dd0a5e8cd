//! Meeting intake and listing

use std::sync::Arc;

use agendahub_core::SchedulingService;
use agendahub_domain::{Meeting, MeetingDraft};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub meeting: Meeting,
    /// User-visible confirmation line.
    pub confirmation: String,
}

/// Validate and store a submitted meeting draft.
pub async fn create_meeting(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<MeetingDraft>,
) -> ApiResult<(StatusCode, Json<ScheduleResponse>)> {
    let meeting = ctx.scheduling.schedule(&draft).await?;
    let confirmation = SchedulingService::confirmation(&meeting);
    Ok((StatusCode::CREATED, Json(ScheduleResponse { meeting, confirmation })))
}

/// All stored meetings in insertion order.
pub async fn list_meetings(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<Vec<Meeting>>> {
    Ok(Json(ctx.scheduling.list().await?))
}

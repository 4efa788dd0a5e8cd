//! Landing dashboard summary

use std::sync::Arc;

use agendahub_core::{dashboard, DashboardSummary};
use axum::extract::State;
use axum::Json;
use chrono::{Local, Timelike};
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub greeting: &'static str,
    pub summary: DashboardSummary,
}

/// Today/this-week counts plus the greeting bucket for the current hour.
pub async fn get_dashboard(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<DashboardResponse>> {
    let meetings = ctx.scheduling.list().await?;
    let now = Local::now();

    Ok(Json(DashboardResponse {
        greeting: dashboard::greeting(now.hour()),
        summary: dashboard::summarize(&meetings, now.date_naive()),
    }))
}

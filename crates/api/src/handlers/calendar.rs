//! Monthly calendar projection

use std::sync::Arc;

use agendahub_core::{project, MonthCursor, MonthGrid, MonthSummary};
use agendahub_domain::AgendaError;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Local;
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub grid: MonthGrid,
    pub summary: MonthSummary,
    /// Cursors for month navigation; rollover is already resolved.
    pub prev: MonthCursor,
    pub next: MonthCursor,
}

/// Project the stored meetings onto the requested month, narrowed by the
/// current platform filter.
pub async fn get_month_grid(
    State(ctx): State<Arc<AppContext>>,
    Path((year, month0)): Path<(i32, u32)>,
) -> ApiResult<Json<GridResponse>> {
    let cursor = MonthCursor::new(year, month0)
        .ok_or_else(|| AgendaError::InvalidInput(format!("month index out of range: {month0}")))?;

    let meetings = ctx.scheduling.list().await?;
    let grid = {
        let filter = ctx.filter.read();
        project(cursor, &meetings, &filter)
    };

    let today = Local::now().date_naive();
    Ok(Json(GridResponse {
        summary: grid.summary(today),
        prev: cursor.prev(),
        next: cursor.next(),
        grid,
    }))
}

//! Platform filter state

use std::sync::Arc;

use agendahub_domain::Platform;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub enabled: Vec<Platform>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub platform: Platform,
}

/// Currently enabled platforms.
pub async fn get_filter(State(ctx): State<Arc<AppContext>>) -> Json<FilterResponse> {
    let filter = ctx.filter.read();
    Json(FilterResponse { enabled: filter.enabled().collect() })
}

/// Toggle one platform; self-inverse, an empty set is legal.
pub async fn toggle_platform(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ToggleRequest>,
) -> ApiResult<Json<FilterResponse>> {
    let mut filter = ctx.filter.write();
    filter.toggle(request.platform);
    Ok(Json(FilterResponse { enabled: filter.enabled().collect() }))
}

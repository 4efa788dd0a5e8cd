//! HTTP route table

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{auth, calendar, chat, dashboard, filter, health, meetings, notifications};
use crate::AppContext;

/// Build the application router over a shared context.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/health", get(health::get_health))
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/sign-out", post(auth::sign_out))
        .route("/api/auth/session", get(auth::get_session))
        .route("/api/auth/profile", put(auth::update_profile))
        .route("/api/meetings", get(meetings::list_meetings).post(meetings::create_meeting))
        .route("/api/calendar/{year}/{month0}", get(calendar::get_month_grid))
        .route("/api/filter", get(filter::get_filter).post(filter::toggle_platform))
        .route("/api/notifications", get(notifications::list_notifications))
        .route("/api/notifications/sweep", post(notifications::run_sweep))
        .route("/api/notifications/{id}/read", post(notifications::mark_read))
        .route("/api/notifications/{id}", delete(notifications::dismiss))
        .route("/api/chat/contacts", get(chat::list_contacts).post(chat::add_contact))
        .route("/api/chat/messages", get(chat::list_messages).post(chat::send_message))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .with_state(ctx)
}

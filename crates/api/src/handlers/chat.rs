//! Chat mock surface

use std::sync::Arc;

use agendahub_domain::{ChatMessage, Contact};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::AppContext;

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    /// Optional case-insensitive search over name and agenda id.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddContactRequest {
    pub name: String,
    pub agenda_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Contact roster, optionally narrowed by a search term.
pub async fn list_contacts(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ContactQuery>,
) -> Json<Vec<Contact>> {
    let chat = ctx.chat.read();
    let contacts = match query.q.as_deref() {
        Some(term) => chat.search(term).into_iter().cloned().collect(),
        None => chat.contacts().to_vec(),
    };
    Json(contacts)
}

/// Append an offline placeholder contact.
pub async fn add_contact(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<AddContactRequest>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let contact = ctx.chat.write().add_contact(&request.name, &request.agenda_id)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Message history in append order.
pub async fn list_messages(State(ctx): State<Arc<AppContext>>) -> Json<Vec<ChatMessage>> {
    Json(ctx.chat.read().messages().to_vec())
}

/// Append a local-only message; nothing is delivered to the other party.
pub async fn send_message(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<ChatMessage>)> {
    let sent_at = Local::now().time();
    let message = ctx.chat.write().send(&request.content, sent_at)?;
    Ok((StatusCode::CREATED, Json(message)))
}

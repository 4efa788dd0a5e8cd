//! Integration tests for the HTTP command layer.
//!
//! Each test drives the router directly with `tower::ServiceExt::oneshot`;
//! no listener is bound and the hosted auth service is never contacted.

use std::sync::Arc;

use agendahub_domain::Config;
use agendahub_lib::{build_router, AppContext};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router(seed_demo_data: bool) -> Router {
    let config = Config { seed_demo_data, ..Config::default() };
    let ctx = AppContext::new(config).expect("context builds");
    build_router(Arc::new(ctx))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("handler responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body reads");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request builds")
}

fn send_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn standup_draft() -> Value {
    json!({
        "title": "Standup",
        "date": "2024-06-25",
        "time": "09:00",
        "platform": "microsoft",
        "participants": "a@x.com, b@x.com"
    })
}

#[tokio::test]
async fn health_answers_ok() {
    let app = router(false);
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn scheduled_meeting_appears_in_its_day_bucket() {
    let app = router(false);

    let (status, body) = send(&app, send_json("POST", "/api/meetings", standup_draft())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["meeting"]["participants"], json!(["a@x.com", "b@x.com"]));
    assert_eq!(
        body["confirmation"],
        "Standup has been scheduled for 2024-06-25 at 09:00"
    );

    let (status, body) = send(&app, get("/api/calendar/2024/5")).await;
    assert_eq!(status, StatusCode::OK);
    // June 2024: six leading blanks, thirty day cells.
    assert_eq!(body["grid"]["leading_blanks"], 6);
    let cells = body["grid"]["cells"].as_array().expect("cells array");
    assert_eq!(cells.len(), 30);
    for cell in cells {
        let expected = usize::from(cell["day"] == 25);
        assert_eq!(cell["meetings"].as_array().expect("bucket").len(), expected);
    }

    // Navigation cursors already resolved the rollover.
    assert_eq!(body["next"], json!({ "year": 2024, "month0": 6 }));
    assert_eq!(body["prev"], json!({ "year": 2024, "month0": 4 }));
}

#[tokio::test]
async fn disabling_a_platform_hides_its_meetings() {
    let app = router(false);
    send(&app, send_json("POST", "/api/meetings", standup_draft())).await;

    let (status, body) =
        send(&app, send_json("POST", "/api/filter", json!({ "platform": "microsoft" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enabled"], json!(["google", "zoom"]));

    let (_, body) = send(&app, get("/api/calendar/2024/5")).await;
    let cells = body["grid"]["cells"].as_array().expect("cells array");
    assert!(cells.iter().all(|c| c["meetings"].as_array().expect("bucket").is_empty()));

    // Toggling again restores the original set.
    let (_, body) =
        send(&app, send_json("POST", "/api/filter", json!({ "platform": "microsoft" }))).await;
    assert_eq!(body["enabled"], json!(["google", "microsoft", "zoom"]));
}

#[tokio::test]
async fn invalid_draft_round_trips_field_errors() {
    let app = router(false);
    let draft = json!({
        "title": "",
        "date": "2024-06-25",
        "time": "09:00",
        "platform": "webex",
        "participants": ""
    });

    let (status, body) = send(&app, send_json("POST", "/api/meetings", draft)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");
    let fields: Vec<_> = body["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["title", "platform"]);

    let (_, meetings) = send(&app, get("/api/meetings")).await;
    assert!(meetings.as_array().expect("meetings array").is_empty());
}

#[tokio::test]
async fn notification_flow_over_http() {
    let app = router(false);

    // A meeting starting about ten minutes from now, minute precision.
    let start = Local::now().naive_local() + Duration::minutes(10);
    let draft = json!({
        "title": "Imminent Sync",
        "date": start.format("%Y-%m-%d").to_string(),
        "time": start.format("%H:%M").to_string(),
        "platform": "zoom",
        "participants": ""
    });
    send(&app, send_json("POST", "/api/meetings", draft)).await;

    let (status, body) = send(&app, send_json("POST", "/api/notifications/sweep", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["added"], 1);

    // Re-running the sweep is idempotent.
    let (_, body) = send(&app, send_json("POST", "/api/notifications/sweep", json!({}))).await;
    assert_eq!(body["added"], 0);

    let (_, body) = send(&app, get("/api/notifications")).await;
    assert_eq!(body["unread"], 1);
    let id = body["notifications"][0]["id"].as_str().expect("id").to_string();
    assert!(id.ends_with("-upcoming"));

    let (status, _) =
        send(&app, send_json("POST", &format!("/api/notifications/{id}/read"), json!({}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(&app, get("/api/notifications")).await;
    assert_eq!(body["unread"], 0);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/notifications/{id}"))
        .body(Body::empty())
        .expect("request builds");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        send(&app, send_json("POST", "/api/notifications/missing/read", json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_surface_is_local_only() {
    let app = router(false);

    let (_, contacts) = send(&app, get("/api/chat/contacts")).await;
    assert_eq!(contacts.as_array().expect("contacts").len(), 3);

    let (_, matches) = send(&app, get("/api/chat/contacts?q=sarah")).await;
    let matches = matches.as_array().expect("matches");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["agenda_id"], "AGENDA002");

    let (status, message) =
        send(&app, send_json("POST", "/api/chat/messages", json!({ "content": "On my way" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["sender_id"], "me");

    let (_, messages) = send(&app, get("/api/chat/messages")).await;
    assert_eq!(messages.as_array().expect("messages").len(), 3);

    let (status, _) =
        send(&app, send_json("POST", "/api/chat/messages", json!({ "content": "   " }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn seeded_dashboard_and_session_defaults() {
    let app = router(true);

    let (status, body) = send(&app, get("/api/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    let greeting = body["greeting"].as_str().expect("greeting");
    assert!(["Good morning", "Good afternoon", "Good evening"].contains(&greeting));
    assert!(body["summary"]["today_count"].is_u64());

    let (_, meetings) = send(&app, get("/api/meetings")).await;
    assert_eq!(meetings.as_array().expect("meetings").len(), 6);

    // Nobody is signed in until the collaborator says so.
    let (status, session) = send(&app, get("/api/auth/session")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(session.is_null());
}

#[tokio::test]
async fn month_index_out_of_range_is_a_bad_request() {
    let app = router(false);
    let (status, _) = send(&app, get("/api/calendar/2024/12")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

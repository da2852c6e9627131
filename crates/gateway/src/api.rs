use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Map, Value};
use tracing::info;

use common::models::SignalRecord;
use publisher::SignalSink;

/// Application state shared across handlers.
pub type AppState = Arc<dyn SignalSink>;

/// Creates the webhook router.
pub fn router(sink: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .with_state(sink)
}

/// `POST /webhook` — accept one trading instruction and hand it off.
///
/// The body is read raw rather than through a typed extractor; anything
/// that is not a non-empty JSON object is rejected before a record is
/// built.
async fn webhook(State(sink): State<AppState>, body: Bytes) -> (StatusCode, &'static str) {
    let Some(payload) = parse_payload(&body) else {
        return (StatusCode::BAD_REQUEST, "No data");
    };

    let record = SignalRecord::from_payload(&payload);
    info!("Received signal: {}", record.to_line());

    match sink.publish(record).await {
        Ok(()) => (StatusCode::OK, "Signal processed"),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    }
}

/// Empty bodies, unparseable JSON, `null`, non-objects and empty objects all
/// count as missing payloads.
fn parse_payload(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice(body).ok()? {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

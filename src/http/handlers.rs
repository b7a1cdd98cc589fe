//! Request handlers.
//!
//! # Responsibilities
//! - Accept a form-encoded submission with a single `secret` field
//! - Apply the configured artificial delay before processing
//! - Base64-encode the field and return the result as JSON
//! - Liveness endpoint
//!
//! # Design Decisions
//! - A missing `secret` field degrades to the empty string; the handler
//!   itself has no failure path
//! - The delay is a plain tokio sleep: cancellable when the connection is
//!   dropped, and the response is never produced before it elapses

use axum::extract::{Form, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::http::server::AppState;

/// A single form submission.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SubmitForm {
    pub secret: String,
}

/// Result payload returned to the submitting page.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(rename = "secretMessage")]
    pub secret_message: String,
}

/// Handle a form submission: delay, extract, encode, respond.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Json<SubmitResponse> {
    let started = Instant::now();

    // Simulated latency; elapses unconditionally before the field is encoded.
    let delay = Duration::from_millis(state.config.handler.delay_ms);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let secret_message = encode_secret(&form.secret);

    metrics::counter!("relay_submissions_total").increment(1);
    metrics::histogram!("relay_submit_duration_seconds")
        .record(started.elapsed().as_secs_f64());

    tracing::debug!(secret_len = form.secret.len(), "Form submission encoded");

    Json(SubmitResponse {
        success: true,
        secret_message,
    })
}

/// Standard base64 (RFC 4648): padded, standard alphabet, no line wrapping.
pub fn encode_secret(secret: &str) -> String {
    STANDARD.encode(secret.as_bytes())
}

/// Liveness payload.
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness endpoint.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub mod address;
pub mod appointment;
pub mod caregiver;
pub mod job;
pub mod job_application;
pub mod member;
pub mod user;

use axum::Json;
use serde_json::{json, Value};
use std::fmt::Display;

/// Fills the handler-owned fields of the request span opened by the trace layer.
pub(crate) fn record_span(table: &'static str, action: &'static str, key: impl Display) {
    tracing::Span::current()
        .record("table", table)
        .record("action", action)
        .record("record_key", tracing::field::display(key));
}

pub(crate) fn message(text: impl Into<String>) -> Json<Value> {
    Json(json!({ "message": text.into() }))
}

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use caregiving_server::{db, sea_orm::DatabaseConnection};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Fresh, migrated in-memory SQLite database.
pub async fn test_db() -> DatabaseConnection {
    // one connection: every sqlite::memory: connection is its own database
    let conn = db::connect("sqlite::memory:", 1)
        .await
        .expect("connect to in-memory sqlite");
    db::migrate(&conn).await.expect("run migrations");
    conn
}

pub async fn test_app() -> Router {
    caregiving_server::app(test_db().await, &[], None).expect("build router")
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn user_payload(user_id: i32) -> Value {
    json!({
        "user_id": user_id,
        "email": format!("user{user_id}@example.com"),
        "given_name": "Ada",
        "surname": "Lovelace",
        "city": "Astana",
        "phone_number": "+77010000000",
        "profile_description": "Looking for help at home",
        "password": "correct horse battery staple",
    })
}

pub async fn seed_user(app: &Router, user_id: i32) {
    let (status, body) = post(app, "/user", user_payload(user_id)).await;
    assert_eq!(status, StatusCode::CREATED, "seed user {user_id}: {body}");
}

pub async fn seed_member(app: &Router, user_id: i32) {
    seed_user(app, user_id).await;
    let (status, body) = post(
        app,
        "/member",
        json!({ "member_user_id": user_id, "house_rules": "No smoking" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed member {user_id}: {body}");
}

pub async fn seed_caregiver(app: &Router, user_id: i32) {
    seed_user(app, user_id).await;
    let (status, body) = post(
        app,
        "/caregiver",
        json!({
            "caregiver_user_id": user_id,
            "photo": "photos/c.jpg",
            "gender": "female",
            "caregiving_type": "elderly care",
            "hourly_rate": 12.5,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed caregiver {user_id}: {body}");
}

pub async fn seed_job(app: &Router, job_id: i32, member_user_id: i32) {
    let (status, body) = post(
        app,
        "/job",
        json!({
            "job_id": job_id,
            "member_user_id": member_user_id,
            "required_caregiving_type": "elderly care",
            "other_requirements": "Weekends only",
            "date_posted": "2024-03-01",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed job {job_id}: {body}");
}

pub async fn seed_appointment(app: &Router, appointment_id: i32, caregiver: i32, member: i32) {
    let (status, body) = post(
        app,
        "/appointment",
        json!({
            "appointment_id": appointment_id,
            "caregiver_user_id": caregiver,
            "member_user_id": member,
            "appointment_date": "2024-03-10",
            "appointment_time": "09:30:00",
            "work_hours": 4,
            "status": "pending",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed appointment {appointment_id}: {body}");
}

pub async fn seed_address(app: &Router, member_user_id: i32) {
    let (status, body) = post(
        app,
        "/address",
        json!({
            "member_user_id": member_user_id,
            "house_number": "12A",
            "street": "Kabanbay Batyr",
            "town": "Astana",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed address {member_user_id}: {body}");
}

pub async fn seed_application(app: &Router, caregiver: i32, job_id: i32) {
    let (status, body) = post(
        app,
        "/job_application",
        json!({
            "caregiver_user_id": caregiver,
            "job_id": job_id,
            "date_applied": "2024-03-02",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed application {caregiver}/{job_id}: {body}");
}

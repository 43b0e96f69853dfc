mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

async fn setup() -> axum::Router {
    let app = test_app().await;
    seed_member(&app, 1).await;
    seed_caregiver(&app, 2).await;
    seed_job(&app, 30, 1).await;
    app
}

#[tokio::test]
async fn create_and_fetch_by_caregiver_then_job() {
    let app = setup().await;

    let (status, body) = post(
        &app,
        "/job_application",
        json!({ "caregiver_user_id": 2, "job_id": 30, "date_applied": "2024-04-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Job application created successfully");
    assert_eq!(body["caregiver_user_id"], 2);
    assert_eq!(body["job_id"], 30);

    let (status, application) = get(&app, "/job_application/2/30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        application,
        json!({ "caregiver_user_id": 2, "job_id": 30, "date_applied": "2024-04-01" })
    );

    // key order is (caregiver, job); the swapped path names a different row
    let (status, body) = get(&app, "/job_application/30/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job application not found");
}

#[tokio::test]
async fn applying_twice_to_the_same_job_fails() {
    let app = setup().await;
    seed_application(&app, 2, 30).await;

    let (status, body) = post(
        &app,
        "/job_application",
        json!({ "caregiver_user_id": 2, "job_id": 30, "date_applied": "2024-04-02" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, application) = get(&app, "/job_application/2/30").await;
    assert_eq!(application["date_applied"], "2024-03-02");
}

#[tokio::test]
async fn application_for_unknown_job_fails() {
    let app = setup().await;

    let (status, _) = post(
        &app,
        "/job_application",
        json!({ "caregiver_user_id": 2, "job_id": 999, "date_applied": "2024-04-02" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, applications) = get(&app, "/job_applications").await;
    assert!(applications.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_and_delete_application() {
    let app = setup().await;
    seed_application(&app, 2, 30).await;

    let (status, body) = put(&app, "/job_application/2/30", json!({ "date_applied": "2024-05-05" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job application updated successfully");
    let (_, application) = get(&app, "/job_application/2/30").await;
    assert_eq!(application["date_applied"], "2024-05-05");

    let (status, _) = put(&app, "/job_application/2/30", json!({ "date_applied": "not a date" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = delete(&app, "/job_application/2/30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job application deleted successfully");

    assert_eq!(delete(&app, "/job_application/2/30").await.0, StatusCode::NOT_FOUND);
    // the job itself is untouched
    assert_eq!(get(&app, "/job/30").await.0, StatusCode::OK);
}

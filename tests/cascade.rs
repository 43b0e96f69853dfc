mod common;

use axum::http::StatusCode;
use common::*;

async fn seed_household(app: &axum::Router) {
    seed_member(app, 1).await;
    seed_caregiver(app, 2).await;
    seed_address(app, 1).await;
    seed_appointment(app, 10, 2, 1).await;
    seed_job(app, 20, 1).await;
    seed_application(app, 2, 20).await;
}

#[tokio::test]
async fn deleting_member_removes_its_dependents() {
    let app = test_app().await;
    seed_household(&app).await;

    let (status, body) = delete(&app, "/member/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Member deleted successfully");

    assert_eq!(get(&app, "/member/1").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/address/1").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/appointment/10").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/job/20").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/job_application/2/20").await.0, StatusCode::NOT_FOUND);

    // parent user and the unrelated caregiver survive
    assert_eq!(get(&app, "/user/1").await.0, StatusCode::OK);
    assert_eq!(get(&app, "/caregiver/2").await.0, StatusCode::OK);
}

#[tokio::test]
async fn deleting_job_removes_its_applications() {
    let app = test_app().await;
    seed_household(&app).await;

    assert_eq!(delete(&app, "/job/20").await.0, StatusCode::OK);

    assert_eq!(get(&app, "/job_application/2/20").await.0, StatusCode::NOT_FOUND);
    let (_, applications) = get(&app, "/job_applications").await;
    assert!(applications.as_array().unwrap().is_empty());
    assert_eq!(get(&app, "/appointment/10").await.0, StatusCode::OK);
}

#[tokio::test]
async fn deleting_caregiver_removes_appointments_and_applications() {
    let app = test_app().await;
    seed_household(&app).await;

    assert_eq!(delete(&app, "/caregiver/2").await.0, StatusCode::OK);

    assert_eq!(get(&app, "/appointment/10").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/job_application/2/20").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/job/20").await.0, StatusCode::OK);
    assert_eq!(get(&app, "/user/2").await.0, StatusCode::OK);
}

#[tokio::test]
async fn deleting_user_cascades_through_member_to_jobs() {
    let app = test_app().await;
    seed_household(&app).await;

    assert_eq!(delete(&app, "/user/1").await.0, StatusCode::OK);

    assert_eq!(get(&app, "/address/1").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/job/20").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/job_application/2/20").await.0, StatusCode::NOT_FOUND);
}

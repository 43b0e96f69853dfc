//! Job applications are addressed as `/job_application/{caregiver_id}/{job_id}`;
//! the path segment order matches the composite key order.

use crate::entities::job_application;
use crate::error::{ApiError, ApiJson, ApiPath, ApiResult};
use crate::metrics::{record_delete, record_operation, Operation};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use serde_json::json;

use super::{message, record_span};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateJobApplicationRequest {
    pub caregiver_user_id: i32,
    pub job_id: i32,
    pub date_applied: NaiveDate,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateJobApplicationRequest {
    pub date_applied: Option<NaiveDate>,
}

fn key_display(caregiver_user_id: i32, job_id: i32) -> String {
    format!("{caregiver_user_id}/{job_id}")
}

async fn find_job_application(
    db: &DatabaseConnection,
    caregiver_user_id: i32,
    job_id: i32,
) -> ApiResult<job_application::Model> {
    job_application::Entity::find_by_id((caregiver_user_id, job_id))
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Job application"))
}

pub async fn create_job_application(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateJobApplicationRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span(
        "job_application",
        "create_job_application",
        key_display(payload.caregiver_user_id, payload.job_id),
    );

    let created = job_application::ActiveModel {
        caregiver_user_id: Set(payload.caregiver_user_id),
        job_id: Set(payload.job_id),
        date_applied: Set(payload.date_applied),
    }
    .insert(&db)
    .await
    .map_err(ApiError::rejected_write)?;
    record_operation("job_application", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Job application created successfully",
            "caregiver_user_id": created.caregiver_user_id,
            "job_id": created.job_id,
        })),
    ))
}

pub async fn list_job_applications(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<job_application::Model>>> {
    Ok(Json(job_application::Entity::find().all(&db).await?))
}

pub async fn get_job_application(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath((caregiver_user_id, job_id)): ApiPath<(i32, i32)>,
) -> ApiResult<Json<job_application::Model>> {
    record_span(
        "job_application",
        "get_job_application",
        key_display(caregiver_user_id, job_id),
    );
    Ok(Json(
        find_job_application(&db, caregiver_user_id, job_id).await?,
    ))
}

pub async fn update_job_application(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath((caregiver_user_id, job_id)): ApiPath<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateJobApplicationRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span(
        "job_application",
        "update_job_application",
        key_display(caregiver_user_id, job_id),
    );
    let mut active_application = find_job_application(&db, caregiver_user_id, job_id)
        .await?
        .into_active_model();

    if let Some(date_applied) = payload.date_applied {
        active_application.date_applied = Set(date_applied);
    }

    if active_application.is_changed() {
        active_application
            .update(&db)
            .await
            .map_err(ApiError::rejected_write)?;
        record_operation("job_application", Operation::Update);
    }
    Ok(message("Job application updated successfully"))
}

pub async fn delete_job_application(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath((caregiver_user_id, job_id)): ApiPath<(i32, i32)>,
) -> ApiResult<impl IntoResponse> {
    record_span(
        "job_application",
        "delete_job_application",
        key_display(caregiver_user_id, job_id),
    );
    let res = job_application::Entity::delete_by_id((caregiver_user_id, job_id))
        .exec(&db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Job application"));
    }
    record_delete(&db, "job_application").await;
    Ok(message("Job application deleted successfully"))
}

use crate::entities::job;
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
pub struct CreateJobRequest {
    pub job_id: i32,
    pub member_user_id: i32,
    pub required_caregiving_type: String,
    pub other_requirements: String,
    pub date_posted: NaiveDate,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateJobRequest {
    pub member_user_id: Option<i32>,
    pub required_caregiving_type: Option<String>,
    pub other_requirements: Option<String>,
    pub date_posted: Option<NaiveDate>,
}

async fn find_job(db: &DatabaseConnection, job_id: i32) -> ApiResult<job::Model> {
    job::Entity::find_by_id(job_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Job"))
}

pub async fn create_job(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateJobRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("job", "create_job", payload.job_id);

    let created = job::ActiveModel {
        job_id: Set(payload.job_id),
        member_user_id: Set(payload.member_user_id),
        required_caregiving_type: Set(payload.required_caregiving_type),
        other_requirements: Set(payload.other_requirements),
        date_posted: Set(payload.date_posted),
    }
    .insert(&db)
    .await
    .map_err(ApiError::rejected_write)?;
    record_operation("job", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Job created successfully",
            "job_id": created.job_id,
        })),
    ))
}

pub async fn list_jobs(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<job::Model>>> {
    Ok(Json(job::Entity::find().all(&db).await?))
}

pub async fn get_job(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(job_id): ApiPath<i32>,
) -> ApiResult<Json<job::Model>> {
    record_span("job", "get_job", job_id);
    Ok(Json(find_job(&db, job_id).await?))
}

pub async fn update_job(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(job_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateJobRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("job", "update_job", job_id);
    let mut active_job = find_job(&db, job_id).await?.into_active_model();

    if let Some(member_user_id) = payload.member_user_id {
        active_job.member_user_id = Set(member_user_id);
    }
    if let Some(required_caregiving_type) = payload.required_caregiving_type {
        active_job.required_caregiving_type = Set(required_caregiving_type);
    }
    if let Some(other_requirements) = payload.other_requirements {
        active_job.other_requirements = Set(other_requirements);
    }
    if let Some(date_posted) = payload.date_posted {
        active_job.date_posted = Set(date_posted);
    }

    if active_job.is_changed() {
        active_job.update(&db).await.map_err(ApiError::rejected_write)?;
        record_operation("job", Operation::Update);
    }
    Ok(message("Job updated successfully"))
}

/// Applications to this job are removed with it.
pub async fn delete_job(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(job_id): ApiPath<i32>,
) -> ApiResult<impl IntoResponse> {
    record_span("job", "delete_job", job_id);
    let res = job::Entity::delete_by_id(job_id).exec(&db).await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Job"));
    }
    record_delete(&db, "job").await;
    Ok(message("Job deleted successfully"))
}

use crate::entities::caregiver;
use crate::error::{ApiError, ApiJson, ApiPath, ApiResult};
use crate::metrics::{record_delete, record_operation, Operation};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use serde_json::json;

use super::{message, record_span};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCaregiverRequest {
    pub caregiver_user_id: i32,
    pub photo: String,
    pub gender: String,
    pub caregiving_type: String,
    pub hourly_rate: Decimal,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCaregiverRequest {
    pub photo: Option<String>,
    pub gender: Option<String>,
    pub caregiving_type: Option<String>,
    pub hourly_rate: Option<Decimal>,
}

/// `NUMERIC(10,2)` comes back as `12.50` from Postgres but `12.5` from
/// SQLite; pin the scale so the wire shape does not depend on the backend.
fn with_rate_scale(mut model: caregiver::Model) -> caregiver::Model {
    model.hourly_rate.rescale(2);
    model
}

async fn find_caregiver(
    db: &DatabaseConnection,
    caregiver_user_id: i32,
) -> ApiResult<caregiver::Model> {
    caregiver::Entity::find_by_id(caregiver_user_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Caregiver"))
}

pub async fn create_caregiver(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateCaregiverRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("caregiver", "create_caregiver", payload.caregiver_user_id);

    let created = caregiver::ActiveModel {
        caregiver_user_id: Set(payload.caregiver_user_id),
        photo: Set(payload.photo),
        gender: Set(payload.gender),
        caregiving_type: Set(payload.caregiving_type),
        hourly_rate: Set(payload.hourly_rate.round_dp(2)),
    }
    .insert(&db)
    .await
    .map_err(ApiError::rejected_write)?;
    record_operation("caregiver", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Caregiver created successfully",
            "caregiver_user_id": created.caregiver_user_id,
        })),
    ))
}

pub async fn list_caregivers(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<caregiver::Model>>> {
    let caregivers = caregiver::Entity::find().all(&db).await?;
    Ok(Json(caregivers.into_iter().map(with_rate_scale).collect()))
}

pub async fn get_caregiver(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(caregiver_user_id): ApiPath<i32>,
) -> ApiResult<Json<caregiver::Model>> {
    record_span("caregiver", "get_caregiver", caregiver_user_id);
    Ok(Json(with_rate_scale(
        find_caregiver(&db, caregiver_user_id).await?,
    )))
}

pub async fn update_caregiver(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(caregiver_user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateCaregiverRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("caregiver", "update_caregiver", caregiver_user_id);
    let mut active_caregiver = find_caregiver(&db, caregiver_user_id)
        .await?
        .into_active_model();

    if let Some(photo) = payload.photo {
        active_caregiver.photo = Set(photo);
    }
    if let Some(gender) = payload.gender {
        active_caregiver.gender = Set(gender);
    }
    if let Some(caregiving_type) = payload.caregiving_type {
        active_caregiver.caregiving_type = Set(caregiving_type);
    }
    if let Some(hourly_rate) = payload.hourly_rate {
        active_caregiver.hourly_rate = Set(hourly_rate.round_dp(2));
    }

    if active_caregiver.is_changed() {
        active_caregiver
            .update(&db)
            .await
            .map_err(ApiError::rejected_write)?;
        record_operation("caregiver", Operation::Update);
    }
    Ok(message("Caregiver updated successfully"))
}

pub async fn delete_caregiver(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(caregiver_user_id): ApiPath<i32>,
) -> ApiResult<impl IntoResponse> {
    record_span("caregiver", "delete_caregiver", caregiver_user_id);
    let res = caregiver::Entity::delete_by_id(caregiver_user_id)
        .exec(&db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Caregiver"));
    }
    record_delete(&db, "caregiver").await;
    Ok(message("Caregiver deleted successfully"))
}

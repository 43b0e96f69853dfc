use crate::entities::address;
use crate::error::{ApiError, ApiJson, ApiPath, ApiResult};
use crate::metrics::{record_delete, record_operation, Operation};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use serde_json::json;

use super::{message, record_span};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAddressRequest {
    pub member_user_id: i32,
    pub house_number: String,
    pub street: String,
    pub town: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAddressRequest {
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
}

async fn find_address(db: &DatabaseConnection, member_user_id: i32) -> ApiResult<address::Model> {
    address::Entity::find_by_id(member_user_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Address"))
}

pub async fn create_address(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateAddressRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("address", "create_address", payload.member_user_id);

    let created = address::ActiveModel {
        member_user_id: Set(payload.member_user_id),
        house_number: Set(payload.house_number),
        street: Set(payload.street),
        town: Set(payload.town),
    }
    .insert(&db)
    .await
    .map_err(ApiError::rejected_write)?;
    record_operation("address", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Address created successfully",
            "member_user_id": created.member_user_id,
        })),
    ))
}

pub async fn list_addresses(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<address::Model>>> {
    Ok(Json(address::Entity::find().all(&db).await?))
}

pub async fn get_address(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(member_user_id): ApiPath<i32>,
) -> ApiResult<Json<address::Model>> {
    record_span("address", "get_address", member_user_id);
    Ok(Json(find_address(&db, member_user_id).await?))
}

pub async fn update_address(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(member_user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateAddressRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("address", "update_address", member_user_id);
    let mut active_address = find_address(&db, member_user_id).await?.into_active_model();

    if let Some(house_number) = payload.house_number {
        active_address.house_number = Set(house_number);
    }
    if let Some(street) = payload.street {
        active_address.street = Set(street);
    }
    if let Some(town) = payload.town {
        active_address.town = Set(town);
    }

    if active_address.is_changed() {
        active_address.update(&db).await.map_err(ApiError::rejected_write)?;
        record_operation("address", Operation::Update);
    }
    Ok(message("Address updated successfully"))
}

pub async fn delete_address(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(member_user_id): ApiPath<i32>,
) -> ApiResult<impl IntoResponse> {
    record_span("address", "delete_address", member_user_id);
    let res = address::Entity::delete_by_id(member_user_id).exec(&db).await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Address"));
    }
    record_delete(&db, "address").await;
    Ok(message("Address deleted successfully"))
}

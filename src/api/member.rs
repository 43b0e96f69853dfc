use crate::entities::member;
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
pub struct CreateMemberRequest {
    pub member_user_id: i32,
    pub house_rules: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMemberRequest {
    pub house_rules: Option<String>,
}

async fn find_member(db: &DatabaseConnection, member_user_id: i32) -> ApiResult<member::Model> {
    member::Entity::find_by_id(member_user_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Member"))
}

pub async fn create_member(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateMemberRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("member", "create_member", payload.member_user_id);

    let created = member::ActiveModel {
        member_user_id: Set(payload.member_user_id),
        house_rules: Set(payload.house_rules),
    }
    .insert(&db)
    .await
    .map_err(ApiError::rejected_write)?;
    record_operation("member", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Member created successfully",
            "member_user_id": created.member_user_id,
        })),
    ))
}

pub async fn list_members(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<member::Model>>> {
    Ok(Json(member::Entity::find().all(&db).await?))
}

pub async fn get_member(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(member_user_id): ApiPath<i32>,
) -> ApiResult<Json<member::Model>> {
    record_span("member", "get_member", member_user_id);
    Ok(Json(find_member(&db, member_user_id).await?))
}

pub async fn update_member(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(member_user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateMemberRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("member", "update_member", member_user_id);
    let mut active_member = find_member(&db, member_user_id).await?.into_active_model();

    if let Some(house_rules) = payload.house_rules {
        active_member.house_rules = Set(house_rules);
    }

    if active_member.is_changed() {
        active_member.update(&db).await.map_err(ApiError::rejected_write)?;
        record_operation("member", Operation::Update);
    }
    Ok(message("Member updated successfully"))
}

/// Takes the member's address, appointments and jobs with it.
pub async fn delete_member(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(member_user_id): ApiPath<i32>,
) -> ApiResult<impl IntoResponse> {
    record_span("member", "delete_member", member_user_id);
    let res = member::Entity::delete_by_id(member_user_id).exec(&db).await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Member"));
    }
    record_delete(&db, "member").await;
    Ok(message("Member deleted successfully"))
}

use crate::entities::user;
use crate::error::{ApiError, ApiJson, ApiPath, ApiResult};
use crate::metrics::{record_delete, record_operation, Operation};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{message, record_span};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub user_id: i32,
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub phone_number: String,
    pub profile_description: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub profile_description: Option<String>,
    pub password: Option<String>,
}

/// Wire shape of a user row. The password hash never leaves the server.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub phone_number: String,
    pub profile_description: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.user_id,
            email: model.email,
            given_name: model.given_name,
            surname: model.surname,
            city: model.city,
            phone_number: model.phone_number,
            profile_description: model.profile_description,
        }
    }
}

pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {e}")))
}

async fn find_user(db: &DatabaseConnection, user_id: i32) -> ApiResult<user::Model> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("User"))
}

pub async fn create_user(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("users", "create_user", payload.user_id);

    let new_user = user::ActiveModel {
        user_id: Set(payload.user_id),
        email: Set(payload.email),
        given_name: Set(payload.given_name),
        surname: Set(payload.surname),
        city: Set(payload.city),
        phone_number: Set(payload.phone_number),
        profile_description: Set(payload.profile_description),
        password_hash: Set(hash_password(&payload.password)?),
    };

    let created = new_user.insert(&db).await.map_err(ApiError::rejected_write)?;
    record_operation("user", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "user_id": created.user_id,
        })),
    ))
}

pub async fn list_users(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = user::Entity::find().all(&db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<UserResponse>> {
    record_span("users", "get_user", user_id);
    Ok(Json(find_user(&db, user_id).await?.into()))
}

pub async fn update_user(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("users", "update_user", user_id);
    let mut active_user = find_user(&db, user_id).await?.into_active_model();

    if let Some(email) = payload.email {
        active_user.email = Set(email);
    }
    if let Some(given_name) = payload.given_name {
        active_user.given_name = Set(given_name);
    }
    if let Some(surname) = payload.surname {
        active_user.surname = Set(surname);
    }
    if let Some(city) = payload.city {
        active_user.city = Set(city);
    }
    if let Some(phone_number) = payload.phone_number {
        active_user.phone_number = Set(phone_number);
    }
    if let Some(profile_description) = payload.profile_description {
        active_user.profile_description = Set(profile_description);
    }
    if let Some(password) = payload.password {
        active_user.password_hash = Set(hash_password(&password)?);
    }

    if active_user.is_changed() {
        active_user.update(&db).await.map_err(ApiError::rejected_write)?;
        record_operation("user", Operation::Update);
    }
    Ok(message("User updated successfully"))
}

/// Member and caregiver rows for this user go with it (FK cascade).
pub async fn delete_user(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<impl IntoResponse> {
    record_span("users", "delete_user", user_id);
    let res = user::Entity::delete_by_id(user_id).exec(&db).await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("User"));
    }
    record_delete(&db, "user").await;
    Ok(message("User deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    #[test]
    fn hashed_password_verifies_and_is_not_plaintext() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"hunter2", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong", &parsed)
            .is_err());
    }

    #[test]
    fn user_response_drops_password_hash() {
        let model = user::Model {
            user_id: 7,
            email: "a@x.com".into(),
            given_name: "A".into(),
            surname: "B".into(),
            city: "C".into(),
            phone_number: "555".into(),
            profile_description: "d".into(),
            password_hash: "$argon2id$secret".into(),
        };
        let value = serde_json::to_value(UserResponse::from(model)).unwrap();
        assert_eq!(value["user_id"], 7);
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let err = serde_json::from_str::<UpdateUserRequest>(r#"{"nickname":"x"}"#);
        assert!(err.is_err());
        let empty: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.email.is_none() && empty.password.is_none());
    }
}

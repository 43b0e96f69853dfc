use crate::entities::appointment;
use crate::error::{ApiError, ApiJson, ApiPath, ApiResult};
use crate::metrics::{record_delete, record_operation, Operation};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use serde_json::json;

use super::{message, record_span};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAppointmentRequest {
    pub appointment_id: i32,
    pub caregiver_user_id: i32,
    pub member_user_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub work_hours: i32,
    pub status: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppointmentRequest {
    pub caregiver_user_id: Option<i32>,
    pub member_user_id: Option<i32>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub work_hours: Option<i32>,
    pub status: Option<String>,
}

async fn find_appointment(
    db: &DatabaseConnection,
    appointment_id: i32,
) -> ApiResult<appointment::Model> {
    appointment::Entity::find_by_id(appointment_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Appointment"))
}

pub async fn create_appointment(
    Extension(db): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<CreateAppointmentRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("appointment", "create_appointment", payload.appointment_id);

    let created = appointment::ActiveModel {
        appointment_id: Set(payload.appointment_id),
        caregiver_user_id: Set(payload.caregiver_user_id),
        member_user_id: Set(payload.member_user_id),
        appointment_date: Set(payload.appointment_date),
        appointment_time: Set(payload.appointment_time),
        work_hours: Set(payload.work_hours),
        status: Set(payload.status),
    }
    .insert(&db)
    .await
    .map_err(ApiError::rejected_write)?;
    record_operation("appointment", Operation::Create);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment created successfully",
            "appointment_id": created.appointment_id,
        })),
    ))
}

pub async fn list_appointments(
    Extension(db): Extension<DatabaseConnection>,
) -> ApiResult<Json<Vec<appointment::Model>>> {
    Ok(Json(appointment::Entity::find().all(&db).await?))
}

pub async fn get_appointment(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(appointment_id): ApiPath<i32>,
) -> ApiResult<Json<appointment::Model>> {
    record_span("appointment", "get_appointment", appointment_id);
    Ok(Json(find_appointment(&db, appointment_id).await?))
}

pub async fn update_appointment(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(appointment_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateAppointmentRequest>,
) -> ApiResult<impl IntoResponse> {
    record_span("appointment", "update_appointment", appointment_id);
    let mut active_appointment = find_appointment(&db, appointment_id)
        .await?
        .into_active_model();

    if let Some(caregiver_user_id) = payload.caregiver_user_id {
        active_appointment.caregiver_user_id = Set(caregiver_user_id);
    }
    if let Some(member_user_id) = payload.member_user_id {
        active_appointment.member_user_id = Set(member_user_id);
    }
    if let Some(appointment_date) = payload.appointment_date {
        active_appointment.appointment_date = Set(appointment_date);
    }
    if let Some(appointment_time) = payload.appointment_time {
        active_appointment.appointment_time = Set(appointment_time);
    }
    if let Some(work_hours) = payload.work_hours {
        active_appointment.work_hours = Set(work_hours);
    }
    if let Some(status) = payload.status {
        active_appointment.status = Set(status);
    }

    if active_appointment.is_changed() {
        active_appointment
            .update(&db)
            .await
            .map_err(ApiError::rejected_write)?;
        record_operation("appointment", Operation::Update);
    }
    Ok(message("Appointment updated successfully"))
}

pub async fn delete_appointment(
    Extension(db): Extension<DatabaseConnection>,
    ApiPath(appointment_id): ApiPath<i32>,
) -> ApiResult<impl IntoResponse> {
    record_span("appointment", "delete_appointment", appointment_id);
    let res = appointment::Entity::delete_by_id(appointment_id)
        .exec(&db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Appointment"));
    }
    record_delete(&db, "appointment").await;
    Ok(message("Appointment deleted successfully"))
}

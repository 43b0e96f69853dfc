use axum::{
    body::Body,
    extract::{DefaultBodyLimit, MatchedPath},
    http::{header, HeaderValue, Method, Request, Response},
    routing::{get, post},
    Extension, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::api;
use crate::config::ConfigError;

const MAX_BODY_BYTES: usize = 64 * 1024;

async fn hello() -> &'static str {
    "Hello from the caregiving service!"
}

async fn health_check() -> &'static str {
    "OK"
}

/// Builds the full HTTP surface: one route group per entity plus `/` and `/health`, and
/// `/metrics` when a Prometheus handle is supplied.
pub fn app(
    db: DatabaseConnection,
    cors_allowed_origins: &[String],
    metric_handle: Option<PrometheusHandle>,
) -> Result<Router, ConfigError> {
    let entity_routes = Router::new()
        .route("/user", post(api::user::create_user))
        .route("/users", get(api::user::list_users))
        .route(
            "/user/:user_id",
            get(api::user::get_user)
                .put(api::user::update_user)
                .delete(api::user::delete_user),
        )
        .route("/member", post(api::member::create_member))
        .route("/members", get(api::member::list_members))
        .route(
            "/member/:member_user_id",
            get(api::member::get_member)
                .put(api::member::update_member)
                .delete(api::member::delete_member),
        )
        .route("/caregiver", post(api::caregiver::create_caregiver))
        .route("/caregivers", get(api::caregiver::list_caregivers))
        .route(
            "/caregiver/:caregiver_user_id",
            get(api::caregiver::get_caregiver)
                .put(api::caregiver::update_caregiver)
                .delete(api::caregiver::delete_caregiver),
        )
        .route("/address", post(api::address::create_address))
        .route("/addresses", get(api::address::list_addresses))
        .route(
            "/address/:member_user_id",
            get(api::address::get_address)
                .put(api::address::update_address)
                .delete(api::address::delete_address),
        )
        .route("/appointment", post(api::appointment::create_appointment))
        .route("/appointments", get(api::appointment::list_appointments))
        .route(
            "/appointment/:appointment_id",
            get(api::appointment::get_appointment)
                .put(api::appointment::update_appointment)
                .delete(api::appointment::delete_appointment),
        )
        .route("/job", post(api::job::create_job))
        .route("/jobs", get(api::job::list_jobs))
        .route(
            "/job/:job_id",
            get(api::job::get_job)
                .put(api::job::update_job)
                .delete(api::job::delete_job),
        )
        .route(
            "/job_application",
            post(api::job_application::create_job_application),
        )
        .route(
            "/job_applications",
            get(api::job_application::list_job_applications),
        )
        .route(
            "/job_application/:caregiver_user_id/:job_id",
            get(api::job_application::get_job_application)
                .put(api::job_application::update_job_application)
                .delete(api::job_application::delete_job_application),
        );

    let mut router = Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .merge(entity_routes);
    if let Some(handle) = metric_handle {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    Ok(router
        .layer(Extension(db))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched| matched.as_str());

                    // "METHOD /route/:param" so spans group by route, not by key
                    let span_name = match matched_path {
                        Some(path) => format!("{} {}", request.method(), path),
                        None => format!("{} {}", request.method(), request.uri().path()),
                    };

                    tracing::info_span!(
                        "request",
                        "otel.name" = span_name,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        table = tracing::field::Empty,
                        action = tracing::field::Empty,
                        record_key = tracing::field::Empty,
                        error = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency = tracing::field::Empty,
                    )
                })
                .on_request(|_request: &Request<Body>, _span: &Span| {})
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", tracing::field::display(response.status()));
                    span.record("latency", tracing::field::debug(latency));
                    tracing::info!("request completed");
                }),
        )
        .layer(cors_layer(cors_allowed_origins)?)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)))
}

/// No configured origins means any origin may call the API.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed = origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    key: "CORS_ALLOWED_ORIGINS",
                    value: origin.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(parsed)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

use caregiving_server::{config::AppConfig, db, metrics, telemetry};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    telemetry::init_telemetry("caregiving-server", &config)?;

    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    let db = db::connect(&config.database_url, config.max_connections).await?;

    if config.run_migrations {
        db::migrate(&db).await?;
        tracing::info!("migrations applied");
    }

    if let Err(e) = metrics::init_metrics(&db).await {
        tracing::warn!(error = %e, "could not seed row metrics");
    }

    let app = caregiving_server::app(db, &config.cors_allowed_origins, Some(metric_handle))?
        .layer(prometheus_layer);

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    opentelemetry::global::shutdown_tracer_provider();
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(err) => tracing::error!("Unable to listen for shutdown signal: {}", err),
    }
}

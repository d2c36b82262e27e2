use crate::cli::ServeArgs;
use crate::infra::{load_factors, AppState};
use crate::routes::with_impact_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use island_impact::config::AppConfig;
use island_impact::error::AppError;
use island_impact::scoring::ImpactEngine;
use island_impact::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let factors = load_factors(&config.scoring)?;
    info!(
        region = factors.region(),
        factors = factors.len(),
        "environmental factors loaded"
    );
    let engine = Arc::new(ImpactEngine::new(factors));

    let app = with_impact_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "impact scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

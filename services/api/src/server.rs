use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryStore};
use crate::routes::with_skill_quest_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skill_quest::auth::{IdentityProvider, StaticIdentityProvider};
use skill_quest::config::AppConfig;
use skill_quest::error::AppError;
use skill_quest::telemetry;
use skill_quest::workflows::assessment::ReadinessEngine;
use skill_quest::workflows::catalog::TrackCatalog;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let identities = StaticIdentityProvider::from_config(&config.auth);
    if identities.is_empty() {
        warn!("APP_AUTH_TOKENS is empty; every /api/v1 request will be rejected");
    }
    let identities: Arc<dyn IdentityProvider> = Arc::new(identities);

    let catalog = Arc::new(TrackCatalog::standard());
    let store = Arc::new(InMemoryStore::seeded(&catalog));
    let engine = ReadinessEngine::new(config.assessment);

    let app = with_skill_quest_routes(store, catalog, engine, identities)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skill quest api ready");

    axum::serve(listener, app).await?;
    Ok(())
}

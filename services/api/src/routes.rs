use crate::infra::{AppState, InMemoryStore};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde_json::json;
use skill_quest::auth::{require_bearer, IdentityProvider};
use skill_quest::workflows::assessment::{assessment_router, AssessmentService, ReadinessEngine};
use skill_quest::workflows::catalog::TrackCatalog;
use skill_quest::workflows::dashboard::{dashboard_router, DashboardService};
use skill_quest::workflows::generators::{generator_router, GeneratorService};
use skill_quest::workflows::learner::{learner_router, LearnerService};
use std::sync::Arc;

/// Every `/api/v1` router behind bearer auth, plus the public probe endpoints.
pub(crate) fn with_skill_quest_routes(
    store: Arc<InMemoryStore>,
    catalog: Arc<TrackCatalog>,
    engine: ReadinessEngine,
    identities: Arc<dyn IdentityProvider>,
) -> Router {
    let learners = Arc::new(LearnerService::new(store.clone(), catalog.clone()));
    let assessments = Arc::new(AssessmentService::new(store.clone(), store.clone(), engine));
    let dashboard = Arc::new(DashboardService::new(store.clone(), store));
    let generators = Arc::new(GeneratorService::new(assessments.clone(), catalog));

    Router::new()
        .merge(learner_router(learners))
        .merge(assessment_router(assessments))
        .merge(dashboard_router(dashboard))
        .merge(generator_router(generators))
        .layer(middleware::from_fn_with_state(identities, require_bearer))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::GeneratorService;
use crate::auth::UserId;
use crate::workflows::assessment::router::error_response;
use crate::workflows::assessment::{AssessmentRepository, TrackId};
use crate::workflows::learner::LearnerRepository;

#[derive(Debug, Deserialize)]
pub struct DomainQuery {
    pub domain: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub track_id: Option<TrackId>,
    #[serde(default)]
    pub max_steps: Option<usize>,
}

pub fn generator_router<A, L>(service: Arc<GeneratorService<A, L>>) -> Router
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    Router::new()
        .route("/api/v1/generate/roles", get(roles_handler::<A, L>))
        .route("/api/v1/generate/projects", get(projects_handler::<A, L>))
        .route("/api/v1/generate/roadmap", post(roadmap_handler::<A, L>))
        .with_state(service)
}

fn unknown_domain(domain: &str) -> Response {
    let payload = json!({ "error": format!("unknown career domain '{domain}'") });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

pub(crate) async fn roles_handler<A, L>(
    State(service): State<Arc<GeneratorService<A, L>>>,
    Query(query): Query<DomainQuery>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.roles(&query.domain) {
        Some(roles) => (StatusCode::OK, Json(roles)).into_response(),
        None => unknown_domain(&query.domain),
    }
}

pub(crate) async fn projects_handler<A, L>(
    State(service): State<Arc<GeneratorService<A, L>>>,
    Query(query): Query<DomainQuery>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.projects(&query.domain) {
        Some(projects) => (StatusCode::OK, Json(projects)).into_response(),
        None => unknown_domain(&query.domain),
    }
}

pub(crate) async fn roadmap_handler<A, L>(
    State(service): State<Arc<GeneratorService<A, L>>>,
    Extension(user): Extension<UserId>,
    Json(request): Json<RoadmapRequest>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.roadmap(&user, request.track_id, request.max_steps) {
        Ok(roadmap) => (StatusCode::OK, Json(roadmap)).into_response(),
        Err(error) => error_response(error),
    }
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::TrackId;
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::auth::UserId;
use crate::workflows::learner::LearnerRepository;

#[derive(Debug, Default, Deserialize)]
pub struct RunAssessmentRequest {
    #[serde(default)]
    pub track_id: Option<TrackId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router exposing gap-analysis runs and assessment history.
pub fn assessment_router<A, L>(service: Arc<AssessmentService<A, L>>) -> Router
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            get(history_handler::<A, L>).post(run_handler::<A, L>),
        )
        .route("/api/v1/assessments/latest", get(latest_handler::<A, L>))
        .with_state(service)
}

pub(crate) fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Ingestion(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::NotOnboarded
        | AssessmentServiceError::Repository(RepositoryError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            warn!(error = %error, "assessment repository unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn run_handler<A, L>(
    State(service): State<Arc<AssessmentService<A, L>>>,
    Extension(user): Extension<UserId>,
    request: Option<Json<RunAssessmentRequest>>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    let request = request.map(|Json(request)| request).unwrap_or_default();
    match service.run(&user, request.track_id) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<A, L>(
    State(service): State<Arc<AssessmentService<A, L>>>,
    Extension(user): Extension<UserId>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.history(&user, query.limit) {
        Ok(history) => (StatusCode::OK, Json(history)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_handler<A, L>(
    State(service): State<Arc<AssessmentService<A, L>>>,
    Extension(user): Extension<UserId>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.latest(&user) {
        Ok(Some(stored)) => (StatusCode::OK, Json(stored)).into_response(),
        Ok(None) => {
            let payload = json!({ "error": "no assessments recorded yet" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use super::service::{DashboardError, DashboardService};
use crate::auth::UserId;
use crate::workflows::assessment::AssessmentRepository;
use crate::workflows::learner::LearnerRepository;

pub fn dashboard_router<A, L>(service: Arc<DashboardService<A, L>>) -> Router
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", get(summary_handler::<A, L>))
        .route("/api/v1/dashboard/export.csv", get(export_handler::<A, L>))
        .with_state(service)
}

fn internal_error(error: DashboardError) -> Response {
    warn!(error = %error, "dashboard unavailable");
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn summary_handler<A, L>(
    State(service): State<Arc<DashboardService<A, L>>>,
    Extension(user): Extension<UserId>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.summary(&user, Utc::now()) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => internal_error(error.into()),
    }
}

pub(crate) async fn export_handler<A, L>(
    State(service): State<Arc<DashboardService<A, L>>>,
    Extension(user): Extension<UserId>,
) -> Response
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    match service.export_csv(&user) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"assessments.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

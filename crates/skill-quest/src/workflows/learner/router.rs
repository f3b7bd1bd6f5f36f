use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{CourseCompletionRequest, OnboardingRequest};
use super::repository::LearnerRepository;
use super::service::{LearnerService, LearnerServiceError};
use crate::auth::UserId;
use crate::workflows::assessment::domain::UserSkill;
use crate::workflows::assessment::RepositoryError;

/// Router exposing onboarding and the skill/course ledgers.
pub fn learner_router<L>(service: Arc<LearnerService<L>>) -> Router
where
    L: LearnerRepository + 'static,
{
    Router::new()
        .route("/api/v1/onboarding", post(onboard_handler::<L>))
        .route("/api/v1/profile", get(profile_handler::<L>))
        .route(
            "/api/v1/skills",
            get(list_skills_handler::<L>).post(record_skill_handler::<L>),
        )
        .route("/api/v1/skills/import", post(import_skills_handler::<L>))
        .route(
            "/api/v1/courses",
            get(list_courses_handler::<L>).post(record_course_handler::<L>),
        )
        .with_state(service)
}

pub(crate) fn error_response(error: LearnerServiceError) -> Response {
    let status = match &error {
        LearnerServiceError::Validation(_)
        | LearnerServiceError::UnknownDomain(_)
        | LearnerServiceError::UnknownTrack(_)
        | LearnerServiceError::Import(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LearnerServiceError::NotOnboarded
        | LearnerServiceError::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        LearnerServiceError::Repository(RepositoryError::Unavailable(_)) => {
            warn!(error = %error, "learner repository unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn onboard_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
    Json(request): Json<OnboardingRequest>,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.onboard(&user, request) {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.profile(&user) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_skills_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.skills(&user) {
        Ok(skills) => (StatusCode::OK, Json(skills)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_skill_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
    Json(skill): Json<UserSkill>,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.record_skill(&user, skill) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn import_skills_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
    body: String,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.import_skills(&user, &body) {
        Ok(records) => {
            let payload = json!({
                "imported": records.len(),
                "skills": records,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_courses_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.courses(&user) {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_course_handler<L>(
    State(service): State<Arc<LearnerService<L>>>,
    Extension(user): Extension<UserId>,
    Json(request): Json<CourseCompletionRequest>,
) -> Response
where
    L: LearnerRepository + 'static,
{
    match service.record_course(&user, request) {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(error) => error_response(error),
    }
}

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, AssessmentResult, Track, TrackId, UserSkill};
use crate::auth::UserId;

/// Repository record pairing a persisted result with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub track_id: TrackId,
    pub result: AssessmentResult,
}

/// Storage collaborator feeding and recording readiness runs.
///
/// Assessment history is append-only: implementations never update or delete a
/// persisted result.
pub trait AssessmentRepository: Send + Sync {
    fn fetch_track(&self, track_id: &TrackId) -> Result<Track, RepositoryError>;
    fn fetch_user_skills(&self, user_id: &UserId) -> Result<Vec<UserSkill>, RepositoryError>;
    fn persist_assessment_result(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        result: AssessmentResult,
    ) -> Result<AssessmentId, RepositoryError>;
    /// Most recent first.
    fn fetch_assessment_history(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<StoredAssessment>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

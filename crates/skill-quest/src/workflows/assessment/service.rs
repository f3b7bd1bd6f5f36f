use std::sync::{Arc, Mutex};

use tracing::info;

use super::analyzer::GapAnalysis;
use super::domain::{IngestionError, Track, TrackId};
use super::engine::ReadinessEngine;
use super::repository::{AssessmentRepository, RepositoryError, StoredAssessment};
use crate::auth::UserId;
use crate::workflows::learner::LearnerRepository;

/// Upper bound on a single history page.
pub const MAX_HISTORY_LIMIT: usize = 50;

/// Service composing the readiness engine with the assessment and learner stores.
pub struct AssessmentService<A, L> {
    assessments: Arc<A>,
    learners: Arc<L>,
    engine: Arc<ReadinessEngine>,
    /// Held from the clock reading until the result is appended, so history
    /// order matches timestamp order.
    recording: Mutex<()>,
}

impl<A, L> AssessmentService<A, L>
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    pub fn new(assessments: Arc<A>, learners: Arc<L>, engine: ReadinessEngine) -> Self {
        Self {
            assessments,
            learners,
            engine: Arc::new(engine),
            recording: Mutex::new(()),
        }
    }

    /// Track the learner picked during onboarding.
    pub fn profile_track(&self, user_id: &UserId) -> Result<TrackId, AssessmentServiceError> {
        self.learners
            .fetch_profile(user_id)?
            .map(|profile| profile.track_id)
            .ok_or(AssessmentServiceError::NotOnboarded)
    }

    fn resolve_track(
        &self,
        user_id: &UserId,
        track_id: Option<TrackId>,
    ) -> Result<Track, AssessmentServiceError> {
        let track_id = match track_id {
            Some(track_id) => track_id,
            None => self.profile_track(user_id)?,
        };
        Ok(self.assessments.fetch_track(&track_id)?)
    }

    /// Run a gap analysis against `track_id`, or the onboarded track when absent,
    /// and append the result to the learner's history.
    pub fn run(
        &self,
        user_id: &UserId,
        track_id: Option<TrackId>,
    ) -> Result<StoredAssessment, AssessmentServiceError> {
        let track = self.resolve_track(user_id, track_id)?;
        let skills = self.assessments.fetch_user_skills(user_id)?;

        let (id, result) = {
            let _recording = match self.recording.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let result = self.engine.run_gap_analysis(&track, &skills)?;
            let id = self
                .assessments
                .persist_assessment_result(user_id, &track.id, result.clone())?;
            (id, result)
        };

        info!(
            user = %user_id,
            track = %track.id.as_str(),
            score = result.readiness_score,
            "assessment recorded"
        );

        Ok(StoredAssessment {
            id,
            user_id: user_id.clone(),
            track_id: track.id,
            result,
        })
    }

    pub fn run_for_profile(
        &self,
        user_id: &UserId,
    ) -> Result<StoredAssessment, AssessmentServiceError> {
        self.run(user_id, None)
    }

    /// Gap entries for the current snapshot without touching history.
    pub fn preview(
        &self,
        user_id: &UserId,
        track_id: Option<TrackId>,
    ) -> Result<(Track, GapAnalysis), AssessmentServiceError> {
        let track = self.resolve_track(user_id, track_id)?;
        let skills = self.assessments.fetch_user_skills(user_id)?;
        let analysis = self.engine.analyze(&track, &skills)?;
        Ok((track, analysis))
    }

    /// Most recent first. `None` falls back to the configured page size.
    pub fn history(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<StoredAssessment>, AssessmentServiceError> {
        let limit = limit
            .unwrap_or(self.engine.config().history_limit)
            .clamp(1, MAX_HISTORY_LIMIT);
        Ok(self.assessments.fetch_assessment_history(user_id, limit)?)
    }

    pub fn latest(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StoredAssessment>, AssessmentServiceError> {
        Ok(self
            .assessments
            .fetch_assessment_history(user_id, 1)?
            .into_iter()
            .next())
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("learner has not completed onboarding")]
    NotOnboarded,
}

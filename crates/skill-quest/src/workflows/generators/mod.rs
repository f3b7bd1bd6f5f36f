//! Template-driven role, roadmap, and project suggestions.
//!
//! Everything here is a lookup table or plain arithmetic over gap entries; there is
//! no model behind these endpoints.

pub mod projects;
pub mod roadmap;
pub mod roles;
pub mod router;

use std::sync::Arc;

pub use projects::{suggest_projects, ProjectDifficulty, ProjectIdea};
pub use roadmap::{generate_roadmap, Roadmap, RoadmapStep, WEEKS_PER_LEVEL};
pub use roles::{suggest_roles, RoleSuggestion};
pub use router::generator_router;

use crate::auth::UserId;
use crate::workflows::assessment::{
    AssessmentRepository, AssessmentService, AssessmentServiceError, TrackId,
};
use crate::workflows::catalog::TrackCatalog;
use crate::workflows::learner::LearnerRepository;

pub const DEFAULT_ROADMAP_STEPS: usize = 5;

pub struct GeneratorService<A, L> {
    assessments: Arc<AssessmentService<A, L>>,
    catalog: Arc<TrackCatalog>,
}

impl<A, L> GeneratorService<A, L>
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    pub fn new(assessments: Arc<AssessmentService<A, L>>, catalog: Arc<TrackCatalog>) -> Self {
        Self {
            assessments,
            catalog,
        }
    }

    pub fn roles(&self, domain: &str) -> Option<Vec<RoleSuggestion>> {
        suggest_roles(&self.catalog, domain)
    }

    pub fn projects(&self, domain: &str) -> Option<&'static [ProjectIdea]> {
        suggest_projects(domain)
    }

    /// Roadmap from the learner's current snapshot; nothing is persisted.
    pub fn roadmap(
        &self,
        user_id: &UserId,
        track_id: Option<TrackId>,
        max_steps: Option<usize>,
    ) -> Result<Roadmap, AssessmentServiceError> {
        let (track, analysis) = self.assessments.preview(user_id, track_id)?;
        Ok(generate_roadmap(
            &track.id,
            &track.name,
            &analysis.entries,
            max_steps.unwrap_or(DEFAULT_ROADMAP_STEPS),
        ))
    }
}

//! Skill-gap readiness scoring.
//!
//! The gap analyzer and report assembler are pure: they take a [`Track`] and a
//! learner snapshot and produce an [`AssessmentResult`] or an [`IngestionError`].
//! Fetching inputs and recording results goes through [`AssessmentRepository`].

pub mod analyzer;
pub mod domain;
pub mod engine;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

pub use analyzer::{analyze, GapAnalysis};
pub use domain::{
    AssessmentId, AssessmentResult, GapEntry, GapStatus, IngestionError, ReadinessTier,
    RequiredSkill, SkillRadarEntry, Track, TrackId, UserSkill, MAX_SKILL_LEVEL,
};
pub use engine::{Clock, MonotonicClock, ReadinessEngine};
pub use report::{assemble, prioritized_gaps};
pub use repository::{AssessmentRepository, RepositoryError, StoredAssessment};
pub use router::{assessment_router, HistoryQuery, RunAssessmentRequest};
pub use service::{AssessmentService, AssessmentServiceError, MAX_HISTORY_LIMIT};

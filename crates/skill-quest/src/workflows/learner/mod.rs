//! Onboarding, skill records, and course completions.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    CourseCompletion, CourseCompletionRequest, CourseId, LearnerProfile, NewCourse,
    OnboardingRequest, SkillRecord,
};
pub use import::{parse_skills_csv, ImportError};
pub use repository::LearnerRepository;
pub use router::learner_router;
pub use service::{LearnerService, LearnerServiceError};

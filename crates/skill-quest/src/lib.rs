//! Skill Quest learner-progress backend: onboarding, skill and course records,
//! skill-gap readiness assessments, dashboards, and template-driven suggestions.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

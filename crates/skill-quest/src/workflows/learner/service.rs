use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    CourseCompletion, CourseCompletionRequest, LearnerProfile, NewCourse, OnboardingRequest,
    SkillRecord,
};
use super::import::{parse_skills_csv, ImportError};
use super::repository::LearnerRepository;
use crate::auth::UserId;
use crate::workflows::assessment::domain::{UserSkill, MAX_SKILL_LEVEL};
use crate::workflows::assessment::RepositoryError;
use crate::workflows::catalog::TrackCatalog;

/// Service handling onboarding plus the skill and course ledgers.
pub struct LearnerService<L> {
    repository: Arc<L>,
    catalog: Arc<TrackCatalog>,
}

impl<L> LearnerService<L>
where
    L: LearnerRepository + 'static,
{
    pub fn new(repository: Arc<L>, catalog: Arc<TrackCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    /// Select a domain and track, replacing any earlier choice.
    pub fn onboard(
        &self,
        user_id: &UserId,
        request: OnboardingRequest,
    ) -> Result<LearnerProfile, LearnerServiceError> {
        let display_name = request.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(LearnerServiceError::Validation(
                "display name must not be empty".to_string(),
            ));
        }

        let domain = self
            .catalog
            .domain(&request.domain)
            .ok_or_else(|| LearnerServiceError::UnknownDomain(request.domain.clone()))?;
        let track = self
            .catalog
            .track(&request.track_id)
            .ok_or_else(|| LearnerServiceError::UnknownTrack(request.track_id.0.clone()))?;
        if track.domain != domain.slug {
            return Err(LearnerServiceError::Validation(format!(
                "track '{}' is not part of the '{}' domain",
                track.id.as_str(),
                domain.slug
            )));
        }

        let profile = LearnerProfile {
            user_id: user_id.clone(),
            display_name,
            domain: domain.slug.to_string(),
            track_id: track.id.clone(),
            onboarded_at: Utc::now(),
        };
        self.repository.upsert_profile(profile.clone())?;
        info!(user = %user_id, track = %profile.track_id.as_str(), "learner onboarded");
        Ok(profile)
    }

    pub fn profile(&self, user_id: &UserId) -> Result<LearnerProfile, LearnerServiceError> {
        self.repository
            .fetch_profile(user_id)?
            .ok_or(LearnerServiceError::NotOnboarded)
    }

    pub fn record_skill(
        &self,
        user_id: &UserId,
        skill: UserSkill,
    ) -> Result<SkillRecord, LearnerServiceError> {
        let record = validated_record(skill)?;
        self.repository.upsert_skills(user_id, vec![record.clone()])?;
        Ok(record)
    }

    /// Upserts every row of a `name,level` CSV, or nothing when a row is invalid.
    pub fn import_skills(
        &self,
        user_id: &UserId,
        csv: &str,
    ) -> Result<Vec<SkillRecord>, LearnerServiceError> {
        let skills = parse_skills_csv(csv.as_bytes())?;
        let records = skills
            .into_iter()
            .map(validated_record)
            .collect::<Result<Vec<_>, _>>()?;
        self.repository.upsert_skills(user_id, records.clone())?;
        info!(user = %user_id, count = records.len(), "skills imported");
        Ok(records)
    }

    /// Recorded skills, sorted by name.
    pub fn skills(&self, user_id: &UserId) -> Result<Vec<SkillRecord>, LearnerServiceError> {
        let mut skills = self.repository.list_skills(user_id)?;
        skills.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(skills)
    }

    pub fn record_course(
        &self,
        user_id: &UserId,
        request: CourseCompletionRequest,
    ) -> Result<CourseCompletion, LearnerServiceError> {
        let title = request.title.trim().to_string();
        if title.is_empty() {
            return Err(LearnerServiceError::Validation(
                "course title must not be empty".to_string(),
            ));
        }

        let course = NewCourse {
            title,
            provider: request
                .provider
                .map(|provider| provider.trim().to_string())
                .filter(|provider| !provider.is_empty()),
            skills: request
                .skills
                .into_iter()
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
            completed_on: request.completed_on,
            recorded_at: Utc::now(),
        };
        Ok(self.repository.insert_course(user_id, course)?)
    }

    /// Course completions, most recent completion date first.
    pub fn courses(&self, user_id: &UserId) -> Result<Vec<CourseCompletion>, LearnerServiceError> {
        let mut courses = self.repository.list_courses(user_id)?;
        courses.sort_by(|left, right| {
            right
                .completed_on
                .cmp(&left.completed_on)
                .then_with(|| right.recorded_at.cmp(&left.recorded_at))
        });
        Ok(courses)
    }
}

fn validated_record(skill: UserSkill) -> Result<SkillRecord, LearnerServiceError> {
    let name = skill.name.trim().to_string();
    if name.is_empty() {
        return Err(LearnerServiceError::Validation(
            "skill name must not be empty".to_string(),
        ));
    }
    if skill.level > MAX_SKILL_LEVEL {
        return Err(LearnerServiceError::Validation(format!(
            "level {} for '{}' is above {}",
            skill.level, name, MAX_SKILL_LEVEL
        )));
    }
    Ok(SkillRecord {
        name,
        level: skill.level,
        updated_at: Utc::now(),
    })
}

/// Error raised by the learner service.
#[derive(Debug, thiserror::Error)]
pub enum LearnerServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("unknown career domain '{0}'")]
    UnknownDomain(String),
    #[error("unknown track '{0}'")]
    UnknownTrack(String),
    #[error("learner has not completed onboarding")]
    NotOnboarded,
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

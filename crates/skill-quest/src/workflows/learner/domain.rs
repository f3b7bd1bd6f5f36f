use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::UserId;
use crate::workflows::assessment::domain::{TrackId, UserSkill};

/// Identifier wrapper for recorded course completions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

/// Career choice captured when the learner onboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub user_id: UserId,
    pub display_name: String,
    pub domain: String,
    pub track_id: TrackId,
    pub onboarded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub display_name: String,
    pub domain: String,
    pub track_id: TrackId,
}

/// Stored skill level, upserted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: u8,
    pub updated_at: DateTime<Utc>,
}

impl SkillRecord {
    pub fn as_user_skill(&self) -> UserSkill {
        UserSkill::new(self.name.clone(), self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCompletionRequest {
    pub title: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub completed_on: NaiveDate,
}

/// Append-only record of a finished course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCompletion {
    pub id: CourseId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub skills: Vec<String>,
    pub completed_on: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

/// Validated course details awaiting an id from the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub provider: Option<String>,
    pub skills: Vec<String>,
    pub completed_on: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

impl NewCourse {
    pub fn with_id(self, id: CourseId) -> CourseCompletion {
        CourseCompletion {
            id,
            title: self.title,
            provider: self.provider,
            skills: self.skills,
            completed_on: self.completed_on,
            recorded_at: self.recorded_at,
        }
    }
}

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::badges::{award_badges, Badge, ProgressCounts};
use super::export::{assessments_to_csv, ExportError};
use crate::auth::UserId;
use crate::workflows::assessment::{
    AssessmentRepository, ReadinessTier, RepositoryError, StoredAssessment,
};
use crate::workflows::learner::{LearnerProfile, LearnerRepository};

/// Assessments older than this trigger a refresh prompt.
pub const STALE_ASSESSMENT_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<LearnerProfile>,
    pub skill_count: usize,
    pub average_skill_level: f32,
    pub courses_completed: usize,
    pub assessments_taken: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_readiness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_tier: Option<ReadinessTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_change: Option<i16>,
    pub badges: Vec<Badge>,
    pub next_actions: Vec<String>,
}

/// Read-only progress view across the learner and assessment stores.
pub struct DashboardService<A, L> {
    assessments: Arc<A>,
    learners: Arc<L>,
}

impl<A, L> DashboardService<A, L>
where
    A: AssessmentRepository + 'static,
    L: LearnerRepository + 'static,
{
    pub fn new(assessments: Arc<A>, learners: Arc<L>) -> Self {
        Self {
            assessments,
            learners,
        }
    }

    fn full_history(&self, user_id: &UserId) -> Result<Vec<StoredAssessment>, RepositoryError> {
        self.assessments.fetch_assessment_history(user_id, usize::MAX)
    }

    pub fn summary(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary, RepositoryError> {
        let profile = self.learners.fetch_profile(user_id)?;
        let skills = self.learners.list_skills(user_id)?;
        let courses = self.learners.list_courses(user_id)?;
        let history = self.full_history(user_id)?;

        let average_skill_level = if skills.is_empty() {
            0.0
        } else {
            let total: u32 = skills.iter().map(|skill| u32::from(skill.level)).sum();
            ((total as f32 / skills.len() as f32) * 10.0).round() / 10.0
        };

        let latest = history.first();
        let latest_readiness = latest.map(|stored| stored.result.readiness_score);
        let readiness_change = match (history.first(), history.get(1)) {
            (Some(latest), Some(previous)) => Some(
                i16::from(latest.result.readiness_score)
                    - i16::from(previous.result.readiness_score),
            ),
            _ => None,
        };

        let counts = ProgressCounts {
            onboarded: profile.is_some(),
            skills: skills.len(),
            courses: courses.len(),
            assessments: history.len(),
            latest_score: latest_readiness,
            score_change: readiness_change,
        };

        let next_actions = next_actions(&counts, latest, now);

        Ok(DashboardSummary {
            profile,
            skill_count: skills.len(),
            average_skill_level,
            courses_completed: courses.len(),
            assessments_taken: history.len(),
            latest_readiness,
            latest_tier: latest.map(|stored| stored.result.readiness_tier),
            readiness_change,
            badges: award_badges(&counts),
            next_actions,
        })
    }

    /// Full assessment history as CSV, oldest run first.
    pub fn export_csv(&self, user_id: &UserId) -> Result<String, DashboardError> {
        let mut history = self.full_history(user_id)?;
        history.reverse();
        Ok(assessments_to_csv(&history)?)
    }
}

fn next_actions(
    counts: &ProgressCounts,
    latest: Option<&StoredAssessment>,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut actions = Vec::new();

    if !counts.onboarded {
        actions.push("Complete onboarding to choose a career track".to_string());
    }
    if counts.skills == 0 {
        actions.push("Record your current skills and levels".to_string());
    }

    match latest {
        None => actions.push("Run your first skill-gap assessment".to_string()),
        Some(stored) => {
            actions.extend(stored.result.suggested_actions.iter().cloned());
            if now - stored.result.timestamp > Duration::days(STALE_ASSESSMENT_DAYS) {
                actions.push(format!(
                    "Re-run your assessment; the latest one is over {STALE_ASSESSMENT_DAYS} days old"
                ));
            }
        }
    }

    actions
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

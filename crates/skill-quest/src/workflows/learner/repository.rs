use super::domain::{CourseCompletion, LearnerProfile, NewCourse, SkillRecord};
use crate::auth::UserId;
use crate::workflows::assessment::RepositoryError;

/// Storage abstraction for learner-owned records.
pub trait LearnerRepository: Send + Sync {
    fn upsert_profile(&self, profile: LearnerProfile) -> Result<(), RepositoryError>;
    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, RepositoryError>;
    /// Replaces any existing record with the same skill name.
    fn upsert_skills(
        &self,
        user_id: &UserId,
        skills: Vec<SkillRecord>,
    ) -> Result<(), RepositoryError>;
    fn list_skills(&self, user_id: &UserId) -> Result<Vec<SkillRecord>, RepositoryError>;
    /// Assigns the course id and appends the completion.
    fn insert_course(
        &self,
        user_id: &UserId,
        course: NewCourse,
    ) -> Result<CourseCompletion, RepositoryError>;
    fn list_courses(&self, user_id: &UserId) -> Result<Vec<CourseCompletion>, RepositoryError>;
}

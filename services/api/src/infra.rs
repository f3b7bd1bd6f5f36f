use metrics_exporter_prometheus::PrometheusHandle;
use skill_quest::auth::UserId;
use skill_quest::workflows::assessment::{
    AssessmentId, AssessmentRepository, AssessmentResult, RepositoryError, StoredAssessment,
    Track, TrackId, UserSkill,
};
use skill_quest::workflows::catalog::TrackCatalog;
use skill_quest::workflows::learner::{
    CourseCompletion, CourseId, LearnerProfile, LearnerRepository, NewCourse, SkillRecord,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store backing both repositories. Nothing survives a restart.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    assessment_sequence: AtomicU64,
    course_sequence: AtomicU64,
    tracks: Mutex<HashMap<TrackId, Track>>,
    profiles: Mutex<HashMap<UserId, LearnerProfile>>,
    skills: Mutex<HashMap<UserId, Vec<SkillRecord>>>,
    courses: Mutex<HashMap<UserId, Vec<CourseCompletion>>>,
    assessments: Mutex<Vec<StoredAssessment>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
}

impl InMemoryStore {
    pub(crate) fn seeded(catalog: &TrackCatalog) -> Self {
        let tracks = catalog
            .tracks()
            .iter()
            .map(|track| (track.id.clone(), track.clone()))
            .collect();
        Self {
            tracks: Mutex::new(tracks),
            ..Self::default()
        }
    }

    fn next_assessment_id(&self) -> AssessmentId {
        let id = self.assessment_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        AssessmentId(format!("asm-{id:06}"))
    }

    fn next_course_id(&self) -> CourseId {
        let id = self.course_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        CourseId(format!("course-{id:06}"))
    }
}

impl AssessmentRepository for InMemoryStore {
    fn fetch_track(&self, track_id: &TrackId) -> Result<Track, RepositoryError> {
        lock(&self.tracks)?
            .get(track_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("track '{}'", track_id.as_str())))
    }

    fn fetch_user_skills(&self, user_id: &UserId) -> Result<Vec<UserSkill>, RepositoryError> {
        Ok(lock(&self.skills)?
            .get(user_id)
            .map(|records| records.iter().map(SkillRecord::as_user_skill).collect())
            .unwrap_or_default())
    }

    fn persist_assessment_result(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        result: AssessmentResult,
    ) -> Result<AssessmentId, RepositoryError> {
        let mut guard = lock(&self.assessments)?;
        let id = self.next_assessment_id();
        guard.push(StoredAssessment {
            id: id.clone(),
            user_id: user_id.clone(),
            track_id: track_id.clone(),
            result,
        });
        Ok(id)
    }

    fn fetch_assessment_history(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<StoredAssessment>, RepositoryError> {
        Ok(lock(&self.assessments)?
            .iter()
            .rev()
            .filter(|stored| &stored.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl LearnerRepository for InMemoryStore {
    fn upsert_profile(&self, profile: LearnerProfile) -> Result<(), RepositoryError> {
        lock(&self.profiles)?.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, RepositoryError> {
        Ok(lock(&self.profiles)?.get(user_id).cloned())
    }

    fn upsert_skills(
        &self,
        user_id: &UserId,
        skills: Vec<SkillRecord>,
    ) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.skills)?;
        let existing = guard.entry(user_id.clone()).or_default();
        for skill in skills {
            match existing.iter_mut().find(|record| record.name == skill.name) {
                Some(record) => *record = skill,
                None => existing.push(skill),
            }
        }
        Ok(())
    }

    fn list_skills(&self, user_id: &UserId) -> Result<Vec<SkillRecord>, RepositoryError> {
        Ok(lock(&self.skills)?
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn insert_course(
        &self,
        user_id: &UserId,
        course: NewCourse,
    ) -> Result<CourseCompletion, RepositoryError> {
        let mut guard = lock(&self.courses)?;
        let course = course.with_id(self.next_course_id());
        guard
            .entry(user_id.clone())
            .or_default()
            .push(course.clone());
        Ok(course)
    }

    fn list_courses(&self, user_id: &UserId) -> Result<Vec<CourseCompletion>, RepositoryError> {
        Ok(lock(&self.courses)?
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

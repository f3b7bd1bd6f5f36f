use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::auth::UserId;
use crate::config::AssessmentConfig;
use crate::workflows::assessment::{
    AssessmentId, AssessmentRepository, AssessmentResult, AssessmentService, Clock,
    ReadinessEngine, RepositoryError, RequiredSkill, StoredAssessment, Track, TrackId, UserSkill,
};
use crate::workflows::catalog::TrackCatalog;
use crate::workflows::learner::{
    CourseCompletion, CourseId, LearnerProfile, LearnerRepository, LearnerService, NewCourse,
    SkillRecord,
};

pub(crate) fn user() -> UserId {
    UserId::new("ada")
}

pub(crate) fn other_user() -> UserId {
    UserId::new("grace")
}

pub(crate) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(crate) fn track_with(id: &str, skills: &[(&str, u8, f64)]) -> Track {
    Track {
        id: TrackId::new(id),
        name: format!("Track {id}"),
        domain: "software-engineering".to_string(),
        summary: String::new(),
        required_skills: skills
            .iter()
            .map(|(name, level, weight)| RequiredSkill::new(*name, *level, *weight))
            .collect(),
    }
}

/// Track requiring A at level 4 (weight 5) and B at level 2 (weight 1).
pub(crate) fn scenario_track() -> Track {
    track_with("scenario", &[("A", 4, 5.0), ("B", 2, 1.0)])
}

pub(crate) fn skills(entries: &[(&str, u8)]) -> Vec<UserSkill> {
    entries
        .iter()
        .map(|(name, level)| UserSkill::new(*name, *level))
        .collect()
}

/// Clock advancing one minute per reading, starting at [`epoch`].
pub(crate) struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub(crate) fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock mutex poisoned");
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

pub(crate) fn engine() -> ReadinessEngine {
    ReadinessEngine::with_clock(
        AssessmentConfig::default(),
        Box::new(SteppingClock::starting_at(epoch())),
    )
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    course_sequence: AtomicU64,
    tracks: Mutex<HashMap<TrackId, Track>>,
    profiles: Mutex<HashMap<UserId, LearnerProfile>>,
    skills: Mutex<HashMap<UserId, Vec<SkillRecord>>>,
    courses: Mutex<HashMap<UserId, Vec<CourseCompletion>>>,
    assessments: Mutex<Vec<StoredAssessment>>,
}

impl MemoryStore {
    pub(crate) fn with_catalog(catalog: &TrackCatalog) -> Self {
        let store = Self::default();
        for track in catalog.tracks() {
            store.add_track(track.clone());
        }
        store
    }

    pub(crate) fn add_track(&self, track: Track) {
        self.tracks
            .lock()
            .expect("track mutex poisoned")
            .insert(track.id.clone(), track);
    }

    pub(crate) fn assessment_count(&self) -> usize {
        self.assessments
            .lock()
            .expect("assessment mutex poisoned")
            .len()
    }
}

impl AssessmentRepository for MemoryStore {
    fn fetch_track(&self, track_id: &TrackId) -> Result<Track, RepositoryError> {
        self.tracks
            .lock()
            .expect("track mutex poisoned")
            .get(track_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("track '{}'", track_id.as_str())))
    }

    fn fetch_user_skills(&self, user_id: &UserId) -> Result<Vec<UserSkill>, RepositoryError> {
        let guard = self.skills.lock().expect("skill mutex poisoned");
        Ok(guard
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
        let mut guard = self.assessments.lock().expect("assessment mutex poisoned");
        let id = AssessmentId(format!("assessment-{:04}", guard.len() + 1));
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
        let guard = self.assessments.lock().expect("assessment mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|stored| &stored.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl LearnerRepository for MemoryStore {
    fn upsert_profile(&self, profile: LearnerProfile) -> Result<(), RepositoryError> {
        self.profiles
            .lock()
            .expect("profile mutex poisoned")
            .insert(profile.user_id.clone(), profile);
        Ok(())
    }

    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, RepositoryError> {
        Ok(self
            .profiles
            .lock()
            .expect("profile mutex poisoned")
            .get(user_id)
            .cloned())
    }

    fn upsert_skills(
        &self,
        user_id: &UserId,
        skills: Vec<SkillRecord>,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.skills.lock().expect("skill mutex poisoned");
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
        Ok(self
            .skills
            .lock()
            .expect("skill mutex poisoned")
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn insert_course(
        &self,
        user_id: &UserId,
        course: NewCourse,
    ) -> Result<CourseCompletion, RepositoryError> {
        let id = self.course_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let course = course.with_id(CourseId(format!("course-{id:04}")));
        self.courses
            .lock()
            .expect("course mutex poisoned")
            .entry(user_id.clone())
            .or_default()
            .push(course.clone());
        Ok(course)
    }

    fn list_courses(&self, user_id: &UserId) -> Result<Vec<CourseCompletion>, RepositoryError> {
        Ok(self
            .courses
            .lock()
            .expect("course mutex poisoned")
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Repository that fails every call, for error-path routing tests.
pub(crate) struct UnavailableStore;

impl AssessmentRepository for UnavailableStore {
    fn fetch_track(&self, _track_id: &TrackId) -> Result<Track, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_user_skills(&self, _user_id: &UserId) -> Result<Vec<UserSkill>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn persist_assessment_result(
        &self,
        _user_id: &UserId,
        _track_id: &TrackId,
        _result: AssessmentResult,
    ) -> Result<AssessmentId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_assessment_history(
        &self,
        _user_id: &UserId,
        _limit: usize,
    ) -> Result<Vec<StoredAssessment>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(crate) struct Fixture {
    pub(crate) store: Arc<MemoryStore>,
    pub(crate) catalog: Arc<TrackCatalog>,
    pub(crate) learners: Arc<LearnerService<MemoryStore>>,
    pub(crate) assessments: Arc<AssessmentService<MemoryStore, MemoryStore>>,
}

pub(crate) fn fixture() -> Fixture {
    fixture_with_engine(engine())
}

pub(crate) fn fixture_with_engine(engine: ReadinessEngine) -> Fixture {
    let catalog = Arc::new(TrackCatalog::standard());
    let store = Arc::new(MemoryStore::with_catalog(&catalog));
    store.add_track(scenario_track());
    let learners = Arc::new(LearnerService::new(store.clone(), catalog.clone()));
    let assessments = Arc::new(AssessmentService::new(store.clone(), store.clone(), engine));
    Fixture {
        store,
        catalog,
        learners,
        assessments,
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(crate) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

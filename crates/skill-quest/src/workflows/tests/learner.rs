use chrono::NaiveDate;

use super::common::*;
use crate::workflows::assessment::{TrackId, UserSkill};
use crate::workflows::learner::{
    CourseCompletionRequest, CourseId, ImportError, LearnerServiceError, OnboardingRequest,
};

fn onboarding(domain: &str, track: &str) -> OnboardingRequest {
    OnboardingRequest {
        display_name: "  Ada Lovelace ".to_string(),
        domain: domain.to_string(),
        track_id: TrackId::new(track),
    }
}

fn course(title: &str, completed_on: (i32, u32, u32)) -> CourseCompletionRequest {
    let (year, month, day) = completed_on;
    CourseCompletionRequest {
        title: title.to_string(),
        provider: Some(" Coursera ".to_string()),
        skills: vec!["SQL".to_string(), "  ".to_string()],
        completed_on: NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
    }
}

#[test]
fn onboarding_stores_the_profile() {
    let fixture = fixture();

    let profile = fixture
        .learners
        .onboard(&user(), onboarding("Data", "data-analyst"))
        .expect("onboarding succeeds");

    assert_eq!(profile.display_name, "Ada Lovelace");
    assert_eq!(profile.domain, "data");
    assert_eq!(
        fixture.learners.profile(&user()).expect("profile stored"),
        profile
    );
}

#[test]
fn onboarding_again_replaces_the_track() {
    let fixture = fixture();
    fixture
        .learners
        .onboard(&user(), onboarding("data", "data-analyst"))
        .expect("first onboarding");
    fixture
        .learners
        .onboard(&user(), onboarding("data", "ml-engineer"))
        .expect("second onboarding");

    let profile = fixture.learners.profile(&user()).expect("profile");
    assert_eq!(profile.track_id, TrackId::new("ml-engineer"));
}

#[test]
fn onboarding_rejects_unknown_choices() {
    let fixture = fixture();

    assert!(matches!(
        fixture
            .learners
            .onboard(&user(), onboarding("astrology", "data-analyst")),
        Err(LearnerServiceError::UnknownDomain(_))
    ));
    assert!(matches!(
        fixture.learners.onboard(&user(), onboarding("data", "wizard")),
        Err(LearnerServiceError::UnknownTrack(_))
    ));
    assert!(matches!(
        fixture
            .learners
            .onboard(&user(), onboarding("design", "data-analyst")),
        Err(LearnerServiceError::Validation(_))
    ));

    let mut blank = onboarding("data", "data-analyst");
    blank.display_name = "   ".to_string();
    assert!(matches!(
        fixture.learners.onboard(&user(), blank),
        Err(LearnerServiceError::Validation(_))
    ));
}

#[test]
fn profile_before_onboarding_is_an_error() {
    let fixture = fixture();

    assert!(matches!(
        fixture.learners.profile(&user()),
        Err(LearnerServiceError::NotOnboarded)
    ));
}

#[test]
fn recording_a_skill_upserts_by_name() {
    let fixture = fixture();
    fixture
        .learners
        .record_skill(&user(), UserSkill::new(" SQL ", 2))
        .expect("recorded");
    fixture
        .learners
        .record_skill(&user(), UserSkill::new("SQL", 4))
        .expect("recorded");
    fixture
        .learners
        .record_skill(&user(), UserSkill::new("Python", 0))
        .expect("level zero is allowed");

    let skills = fixture.learners.skills(&user()).expect("listed");
    let levels: Vec<_> = skills
        .iter()
        .map(|skill| (skill.name.as_str(), skill.level))
        .collect();
    assert_eq!(levels, vec![("Python", 0), ("SQL", 4)]);
}

#[test]
fn recording_a_skill_validates_input() {
    let fixture = fixture();

    assert!(matches!(
        fixture
            .learners
            .record_skill(&user(), UserSkill::new("SQL", 6)),
        Err(LearnerServiceError::Validation(_))
    ));
    assert!(matches!(
        fixture.learners.record_skill(&user(), UserSkill::new(" ", 3)),
        Err(LearnerServiceError::Validation(_))
    ));
    assert!(fixture.learners.skills(&user()).expect("listed").is_empty());
}

#[test]
fn csv_import_upserts_every_row() {
    let fixture = fixture();
    fixture
        .learners
        .record_skill(&user(), UserSkill::new("SQL", 1))
        .expect("recorded");

    let imported = fixture
        .learners
        .import_skills(&user(), "name,level\nSQL,3\nStatistics,2\n")
        .expect("import succeeds");

    assert_eq!(imported.len(), 2);
    let skills = fixture.learners.skills(&user()).expect("listed");
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].name, "SQL");
    assert_eq!(skills[0].level, 3);
}

#[test]
fn csv_import_is_all_or_nothing() {
    let fixture = fixture();

    let result = fixture
        .learners
        .import_skills(&user(), "name,level\nSQL,3\nStatistics,8\n");

    assert!(matches!(
        result,
        Err(LearnerServiceError::Import(ImportError::LevelOutOfRange { row: 2, .. }))
    ));
    assert!(fixture.learners.skills(&user()).expect("listed").is_empty());
}

#[test]
fn courses_are_listed_newest_first() {
    let fixture = fixture();
    fixture
        .learners
        .record_course(&user(), course("SQL Basics", (2025, 3, 1)))
        .expect("recorded");
    let latest = fixture
        .learners
        .record_course(&user(), course("Statistics 101", (2025, 6, 15)))
        .expect("recorded");

    assert_eq!(latest.provider.as_deref(), Some("Coursera"));
    assert_eq!(latest.skills, vec!["SQL".to_string()]);

    let titles: Vec<_> = fixture
        .learners
        .courses(&user())
        .expect("listed")
        .into_iter()
        .map(|course| course.title)
        .collect();
    assert_eq!(titles, vec!["Statistics 101", "SQL Basics"]);
}

#[test]
fn course_ids_come_from_the_store() {
    let first = fixture();
    let second = fixture();

    let sql = first
        .learners
        .record_course(&user(), course("SQL Basics", (2025, 3, 1)))
        .expect("recorded");
    let stats = first
        .learners
        .record_course(&other_user(), course("Statistics 101", (2025, 6, 15)))
        .expect("recorded");
    let elsewhere = second
        .learners
        .record_course(&user(), course("SQL Basics", (2025, 3, 1)))
        .expect("recorded");

    assert_eq!(sql.id, CourseId("course-0001".to_string()));
    assert_eq!(stats.id, CourseId("course-0002".to_string()));
    assert_eq!(elsewhere.id, sql.id);
    assert_eq!(
        first.learners.courses(&user()).expect("listed"),
        vec![sql]
    );
}

#[test]
fn course_titles_are_required() {
    let fixture = fixture();

    assert!(matches!(
        fixture
            .learners
            .record_course(&user(), course("  ", (2025, 1, 1))),
        Err(LearnerServiceError::Validation(_))
    ));
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Pathfinder,
    SkillCollector,
    CourseFinisher,
    Scholar,
    SelfAssessor,
    TrackReady,
    RisingStar,
}

impl BadgeKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pathfinder => "Pathfinder",
            Self::SkillCollector => "Skill Collector",
            Self::CourseFinisher => "Course Finisher",
            Self::Scholar => "Scholar",
            Self::SelfAssessor => "Self Assessor",
            Self::TrackReady => "Track Ready",
            Self::RisingStar => "Rising Star",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Pathfinder => "Picked a career domain and track",
            Self::SkillCollector => "Recorded at least five skills",
            Self::CourseFinisher => "Completed a first course",
            Self::Scholar => "Completed five or more courses",
            Self::SelfAssessor => "Ran a skill-gap assessment",
            Self::TrackReady => "Reached the ready tier for the target track",
            Self::RisingStar => "Improved readiness by ten points or more",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<BadgeKind> for Badge {
    fn from(kind: BadgeKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            description: kind.description(),
        }
    }
}

pub(crate) const SKILL_COLLECTOR_MIN: usize = 5;
pub(crate) const SCHOLAR_MIN: usize = 5;
pub(crate) const TRACK_READY_MIN: u8 = 85;
pub(crate) const RISING_STAR_MIN_DELTA: i16 = 10;

/// Counts the badge rules read.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ProgressCounts {
    pub(crate) onboarded: bool,
    pub(crate) skills: usize,
    pub(crate) courses: usize,
    pub(crate) assessments: usize,
    pub(crate) latest_score: Option<u8>,
    pub(crate) score_change: Option<i16>,
}

pub(crate) fn award_badges(counts: &ProgressCounts) -> Vec<Badge> {
    let rules = [
        (BadgeKind::Pathfinder, counts.onboarded),
        (BadgeKind::SkillCollector, counts.skills >= SKILL_COLLECTOR_MIN),
        (BadgeKind::CourseFinisher, counts.courses >= 1),
        (BadgeKind::Scholar, counts.courses >= SCHOLAR_MIN),
        (BadgeKind::SelfAssessor, counts.assessments >= 1),
        (
            BadgeKind::TrackReady,
            counts
                .latest_score
                .map(|score| score >= TRACK_READY_MIN)
                .unwrap_or(false),
        ),
        (
            BadgeKind::RisingStar,
            counts
                .score_change
                .map(|delta| delta >= RISING_STAR_MIN_DELTA)
                .unwrap_or(false),
        ),
    ];

    rules
        .into_iter()
        .filter(|(_, earned)| *earned)
        .map(|(kind, _)| Badge::from(kind))
        .collect()
}

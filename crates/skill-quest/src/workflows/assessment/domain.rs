use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest proficiency level a skill can be recorded or required at.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Identifier wrapper for career tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier assigned by the store when an assessment is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// A skill the track expects, with its target level and relative importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub required_level: u8,
    pub weight: f64,
}

impl RequiredSkill {
    pub fn new(name: impl Into<String>, required_level: u8, weight: f64) -> Self {
        Self {
            name: name.into(),
            required_level,
            weight,
        }
    }
}

/// Career track profile the readiness engine scores against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub summary: String,
    pub required_skills: Vec<RequiredSkill>,
}

/// A learner's current level for one named skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSkill {
    pub name: String,
    pub level: u8,
}

impl UserSkill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    Met,
    Weak,
    Missing,
}

impl GapStatus {
    pub const fn label(self) -> &'static str {
        match self {
            GapStatus::Met => "met",
            GapStatus::Weak => "weak",
            GapStatus::Missing => "missing",
        }
    }
}

/// Per-skill comparison between the track requirement and the learner snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapEntry {
    pub skill_name: String,
    pub required_level: u8,
    pub user_level: u8,
    pub weight: f64,
    pub gap: u8,
    pub status: GapStatus,
}

impl GapEntry {
    /// Ordering key for recommendations: heavier and wider gaps first.
    pub fn priority(&self) -> f64 {
        self.weight * f64::from(self.gap)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRadarEntry {
    pub skill_name: String,
    pub user_level: u8,
    pub required_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    Ready,
    OnTrack,
    NeedsDevelopment,
}

impl ReadinessTier {
    pub const READY_THRESHOLD: u8 = 85;
    pub const ON_TRACK_THRESHOLD: u8 = 60;

    pub const fn for_score(score: u8) -> Self {
        if score >= Self::READY_THRESHOLD {
            Self::Ready
        } else if score >= Self::ON_TRACK_THRESHOLD {
            Self::OnTrack
        } else {
            Self::NeedsDevelopment
        }
    }

    /// Stable identifier, matching the serialized form.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::OnTrack => "on_track",
            Self::NeedsDevelopment => "needs_development",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::OnTrack => "on track",
            Self::NeedsDevelopment => "needs development",
        }
    }
}

/// Immutable outcome of one gap-analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub track_id: TrackId,
    pub readiness_score: u8,
    pub readiness_tier: ReadinessTier,
    pub skill_radar: Vec<SkillRadarEntry>,
    pub missing_skills: Vec<String>,
    pub weak_skills: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

/// Rejections raised while loading a track or snapshot into the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestionError {
    #[error("invalid track definition: {reason}")]
    InvalidTrackDefinition { reason: String },
    #[error("invalid level {level} for skill '{skill}' (allowed {min}..={max})")]
    InvalidSkillLevel {
        skill: String,
        level: u8,
        min: u8,
        max: u8,
    },
}

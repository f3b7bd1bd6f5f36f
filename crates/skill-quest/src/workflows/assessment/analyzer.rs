use std::collections::HashMap;

use super::domain::{
    GapEntry, GapStatus, IngestionError, RequiredSkill, Track, UserSkill, MAX_SKILL_LEVEL,
};

/// Gap entries in track order plus the weighted readiness percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct GapAnalysis {
    pub entries: Vec<GapEntry>,
    pub readiness_score: u8,
}

pub(crate) fn validate_track(track: &Track) -> Result<(), IngestionError> {
    for skill in &track.required_skills {
        validate_required_skill(skill)?;
    }
    Ok(())
}

fn validate_required_skill(skill: &RequiredSkill) -> Result<(), IngestionError> {
    if skill.name.trim().is_empty() {
        return Err(IngestionError::InvalidTrackDefinition {
            reason: "required skill name must not be empty".to_string(),
        });
    }

    if !(skill.weight.is_finite() && skill.weight > 0.0) {
        return Err(IngestionError::InvalidTrackDefinition {
            reason: format!(
                "weight for '{}' must be strictly positive (got {})",
                skill.name, skill.weight
            ),
        });
    }

    if !(1..=MAX_SKILL_LEVEL).contains(&skill.required_level) {
        return Err(IngestionError::InvalidSkillLevel {
            skill: skill.name.clone(),
            level: skill.required_level,
            min: 1,
            max: MAX_SKILL_LEVEL,
        });
    }

    Ok(())
}

/// Builds the name -> level lookup, keeping the highest level when a name repeats.
pub(crate) fn snapshot_levels(
    user_skills: &[UserSkill],
) -> Result<HashMap<&str, u8>, IngestionError> {
    let mut levels: HashMap<&str, u8> = HashMap::with_capacity(user_skills.len());
    for skill in user_skills {
        if skill.level > MAX_SKILL_LEVEL {
            return Err(IngestionError::InvalidSkillLevel {
                skill: skill.name.clone(),
                level: skill.level,
                min: 0,
                max: MAX_SKILL_LEVEL,
            });
        }
        let level = levels.entry(skill.name.trim()).or_insert(0);
        *level = (*level).max(skill.level);
    }
    Ok(levels)
}

pub(crate) fn classify(required: &RequiredSkill, user_level: u8) -> GapEntry {
    let gap = required.required_level.saturating_sub(user_level);
    let status = if gap == 0 {
        GapStatus::Met
    } else if user_level > 0 {
        GapStatus::Weak
    } else {
        GapStatus::Missing
    };

    GapEntry {
        skill_name: required.name.clone(),
        required_level: required.required_level,
        user_level,
        weight: required.weight,
        gap,
        status,
    }
}

fn weighted_sums(entries: &[GapEntry], divisor: f64) -> (f64, f64) {
    entries
        .iter()
        .fold((0.0_f64, 0.0_f64), |(achieved, max_possible), entry| {
            let weight = entry.weight / divisor;
            let credited = entry.user_level.min(entry.required_level);
            (
                achieved + weight * f64::from(credited),
                max_possible + weight * f64::from(entry.required_level),
            )
        })
}

/// Falls back to weights scaled by the heaviest one when the raw sums overflow.
pub(crate) fn readiness_score(entries: &[GapEntry]) -> u8 {
    let (mut achieved, mut max_possible) = weighted_sums(entries, 1.0);
    if !max_possible.is_finite() {
        let heaviest = entries
            .iter()
            .map(|entry| entry.weight)
            .fold(0.0_f64, f64::max);
        (achieved, max_possible) = weighted_sums(entries, heaviest);
    }

    if !(max_possible.is_finite() && max_possible > 0.0) {
        return 0;
    }

    (100.0 * achieved / max_possible).round().clamp(0.0, 100.0) as u8
}

/// Compares a validated track against a learner snapshot.
pub fn analyze(track: &Track, user_skills: &[UserSkill]) -> Result<GapAnalysis, IngestionError> {
    validate_track(track)?;
    let levels = snapshot_levels(user_skills)?;

    let entries: Vec<GapEntry> = track
        .required_skills
        .iter()
        .map(|required| {
            let user_level = levels.get(required.name.trim()).copied().unwrap_or(0);
            classify(required, user_level)
        })
        .collect();

    let readiness_score = readiness_score(&entries);

    Ok(GapAnalysis {
        entries,
        readiness_score,
    })
}

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::analyzer::GapAnalysis;
use super::domain::{
    AssessmentResult, GapEntry, GapStatus, ReadinessTier, SkillRadarEntry, TrackId,
};

/// Entries with a non-zero gap, highest `weight * gap` first; ties keep track order.
pub fn prioritized_gaps(entries: &[GapEntry]) -> Vec<&GapEntry> {
    let mut open: Vec<&GapEntry> = entries.iter().filter(|entry| entry.gap > 0).collect();
    open.sort_by(|left, right| {
        right
            .priority()
            .partial_cmp(&left.priority())
            .unwrap_or(Ordering::Equal)
    });
    open
}

pub(crate) fn suggested_actions(entries: &[GapEntry], limit: usize) -> Vec<String> {
    prioritized_gaps(entries)
        .into_iter()
        .take(limit)
        .map(|entry| {
            format!(
                "Improve {} from level {} to {}",
                entry.skill_name, entry.user_level, entry.required_level
            )
        })
        .collect()
}

fn names_with_status(entries: &[GapEntry], status: GapStatus) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.status == status)
        .map(|entry| entry.skill_name.clone())
        .collect()
}

pub(crate) fn explanation(
    track_name: &str,
    score: u8,
    tier: ReadinessTier,
    missing: usize,
    weak: usize,
) -> String {
    if missing == 0 && weak == 0 {
        return format!(
            "{score}% readiness for {track_name}: {}. Every required skill is at or above its target level.",
            tier.label()
        );
    }

    format!(
        "{score}% readiness for {track_name}: {}. {missing} missing skill{} and {weak} weak skill{} to close.",
        tier.label(),
        if missing == 1 { "" } else { "s" },
        if weak == 1 { "" } else { "s" },
    )
}

/// Turns a gap analysis into the persisted report shape.
pub fn assemble(
    track_id: &TrackId,
    track_name: &str,
    analysis: &GapAnalysis,
    action_limit: usize,
    timestamp: DateTime<Utc>,
) -> AssessmentResult {
    let skill_radar = analysis
        .entries
        .iter()
        .map(|entry| SkillRadarEntry {
            skill_name: entry.skill_name.clone(),
            user_level: entry.user_level,
            required_level: entry.required_level,
        })
        .collect();

    let missing_skills = names_with_status(&analysis.entries, GapStatus::Missing);
    let weak_skills = names_with_status(&analysis.entries, GapStatus::Weak);
    let readiness_tier = ReadinessTier::for_score(analysis.readiness_score);
    let explanation = explanation(
        track_name,
        analysis.readiness_score,
        readiness_tier,
        missing_skills.len(),
        weak_skills.len(),
    );

    AssessmentResult {
        track_id: track_id.clone(),
        readiness_score: analysis.readiness_score,
        readiness_tier,
        skill_radar,
        missing_skills,
        weak_skills,
        suggested_actions: suggested_actions(&analysis.entries, action_limit),
        explanation,
        timestamp,
    }
}

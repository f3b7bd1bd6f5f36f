use serde::Serialize;

use crate::workflows::assessment::{prioritized_gaps, GapEntry, TrackId};

/// Study time budgeted per level of gap.
pub const WEEKS_PER_LEVEL: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapStep {
    pub order: usize,
    pub skill_name: String,
    pub from_level: u8,
    pub to_level: u8,
    pub estimated_weeks: u32,
    pub cumulative_weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    pub track_id: TrackId,
    pub track_name: String,
    pub steps: Vec<RoadmapStep>,
    pub total_weeks: u32,
}

pub fn generate_roadmap(
    track_id: &TrackId,
    track_name: &str,
    entries: &[GapEntry],
    max_steps: usize,
) -> Roadmap {
    let mut cumulative_weeks = 0;
    let steps: Vec<RoadmapStep> = prioritized_gaps(entries)
        .into_iter()
        .take(max_steps)
        .enumerate()
        .map(|(index, entry)| {
            let estimated_weeks = u32::from(entry.gap) * WEEKS_PER_LEVEL;
            cumulative_weeks += estimated_weeks;
            RoadmapStep {
                order: index + 1,
                skill_name: entry.skill_name.clone(),
                from_level: entry.user_level,
                to_level: entry.required_level,
                estimated_weeks,
                cumulative_weeks,
            }
        })
        .collect();

    Roadmap {
        track_id: track_id.clone(),
        track_name: track_name.to_string(),
        steps,
        total_weeks: cumulative_weeks,
    }
}

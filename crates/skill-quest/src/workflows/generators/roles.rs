use serde::Serialize;

use crate::workflows::assessment::TrackId;
use crate::workflows::catalog::TrackCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSuggestion {
    pub title: String,
    pub summary: String,
    pub track_id: TrackId,
    pub focus_skills: Vec<String>,
}

const SENIORITY_LADDER: [&str; 2] = ["Junior", "Associate"];

/// Entry-level role titles for every track in the domain, `None` for unknown domains.
pub fn suggest_roles(catalog: &TrackCatalog, domain: &str) -> Option<Vec<RoleSuggestion>> {
    catalog.domain(domain)?;

    let suggestions = catalog
        .tracks_in_domain(domain)
        .into_iter()
        .flat_map(|track| {
            let mut focus: Vec<_> = track.required_skills.iter().collect();
            focus.sort_by(|left, right| {
                right
                    .weight
                    .partial_cmp(&left.weight)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let focus_skills: Vec<String> = focus
                .into_iter()
                .take(3)
                .map(|skill| skill.name.clone())
                .collect();

            SENIORITY_LADDER.iter().map(move |seniority| RoleSuggestion {
                title: format!("{seniority} {}", track.name),
                summary: format!("{seniority}-level path into {}. {}", track.name, track.summary),
                track_id: track.id.clone(),
                focus_skills: focus_skills.clone(),
            })
        })
        .collect();

    Some(suggestions)
}

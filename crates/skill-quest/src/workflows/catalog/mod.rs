//! Built-in career domains and the tracks learners can target.

mod blueprint;

use serde::Serialize;

use super::assessment::domain::{Track, TrackId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerDomain {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct TrackCatalog {
    domains: Vec<CareerDomain>,
    tracks: Vec<Track>,
}

impl TrackCatalog {
    pub fn standard() -> Self {
        Self {
            domains: blueprint::standard_domains(),
            tracks: blueprint::standard_tracks(),
        }
    }

    pub fn domains(&self) -> &[CareerDomain] {
        &self.domains
    }

    pub fn domain(&self, slug: &str) -> Option<&CareerDomain> {
        let slug = slug.trim();
        self.domains
            .iter()
            .find(|domain| domain.slug.eq_ignore_ascii_case(slug))
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| &track.id == id)
    }

    pub fn tracks_in_domain(&self, slug: &str) -> Vec<&Track> {
        let slug = slug.trim();
        self.tracks
            .iter()
            .filter(|track| track.domain.eq_ignore_ascii_case(slug))
            .collect()
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

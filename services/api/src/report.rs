use clap::Args;
use skill_quest::config::AssessmentConfig;
use skill_quest::error::AppError;
use skill_quest::workflows::assessment::{
    AssessmentResult, AssessmentServiceError, GapStatus, ReadinessEngine, Track, TrackId,
};
use skill_quest::workflows::catalog::TrackCatalog;
use skill_quest::workflows::learner::parse_skills_csv;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct TracksArgs {
    /// Only list tracks in this domain slug
    #[arg(long)]
    pub(crate) domain: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Catalog track id, e.g. `data-analyst`
    #[arg(long)]
    pub(crate) track: String,
    /// CSV file with `name,level` rows
    #[arg(long)]
    pub(crate) skills_csv: PathBuf,
    /// Number of suggested actions to include
    #[arg(long)]
    pub(crate) actions: Option<usize>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_tracks(args: TracksArgs) -> Result<(), AppError> {
    let catalog = TrackCatalog::standard();
    print!("{}", render_catalog(&catalog, args.domain.as_deref())?);
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        track,
        skills_csv,
        actions,
        json,
    } = args;

    let catalog = TrackCatalog::standard();
    let track = catalog
        .track(&TrackId::new(track.trim()))
        .ok_or_else(|| AppError::Catalog(format!("unknown track '{}'", track.trim())))?;

    let reader = BufReader::new(File::open(&skills_csv)?);
    let skills = parse_skills_csv(reader)?;

    let config = AssessmentConfig {
        suggested_action_limit: actions
            .unwrap_or(AssessmentConfig::default().suggested_action_limit),
        ..AssessmentConfig::default()
    };
    let result = ReadinessEngine::new(config)
        .run_gap_analysis(track, &skills)
        .map_err(AssessmentServiceError::from)?;

    if json {
        let payload = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        print!("{}", render_report(track, &result));
    }

    Ok(())
}

fn render_catalog(catalog: &TrackCatalog, domain: Option<&str>) -> Result<String, AppError> {
    let domains: Vec<_> = match domain {
        Some(slug) => vec![catalog
            .domain(slug)
            .ok_or_else(|| AppError::Catalog(format!("unknown career domain '{slug}'")))?],
        None => catalog.domains().iter().collect(),
    };

    let mut out = String::new();
    for domain in domains {
        out.push_str(&format!("{} ({})\n", domain.name, domain.slug));
        out.push_str(&format!("  {}\n", domain.description));
        for track in catalog.tracks_in_domain(domain.slug) {
            out.push_str(&format!(
                "  - {:<20} {} ({} skills)\n",
                track.id.as_str(),
                track.name,
                track.required_skills.len()
            ));
        }
    }
    Ok(out)
}

fn radar_status(result: &AssessmentResult, skill: &str) -> GapStatus {
    if result.missing_skills.iter().any(|name| name == skill) {
        GapStatus::Missing
    } else if result.weak_skills.iter().any(|name| name == skill) {
        GapStatus::Weak
    } else {
        GapStatus::Met
    }
}

fn render_report(track: &Track, result: &AssessmentResult) -> String {
    let mut out = format!(
        "Readiness report: {} ({})\n  Score: {}% ({})\n  {}\n\nSkill radar\n",
        track.name,
        track.id.as_str(),
        result.readiness_score,
        result.readiness_tier.label(),
        result.explanation
    );

    for entry in &result.skill_radar {
        out.push_str(&format!(
            "  {:<24} {}/{}  {}\n",
            entry.skill_name,
            entry.user_level,
            entry.required_level,
            radar_status(result, &entry.skill_name).label()
        ));
    }

    if !result.suggested_actions.is_empty() {
        out.push_str("\nSuggested actions\n");
        for (index, action) in result.suggested_actions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, action));
        }
    }

    out
}

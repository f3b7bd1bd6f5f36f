use chrono::SecondsFormat;
use serde::Serialize;

use crate::workflows::assessment::StoredAssessment;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finish csv buffer: {0}")]
    Buffer(String),
    #[error("csv output was not utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Serialize)]
struct AssessmentRow<'a> {
    assessment_id: &'a str,
    track_id: &'a str,
    readiness_score: u8,
    readiness_tier: &'static str,
    missing_skills: String,
    weak_skills: String,
    created_at: String,
}

/// Serializes assessments in the order given, one row each, header first.
pub fn assessments_to_csv(assessments: &[StoredAssessment]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if assessments.is_empty() {
        writer.write_record([
            "assessment_id",
            "track_id",
            "readiness_score",
            "readiness_tier",
            "missing_skills",
            "weak_skills",
            "created_at",
        ])?;
    }

    for stored in assessments {
        let result = &stored.result;
        writer.serialize(AssessmentRow {
            assessment_id: &stored.id.0,
            track_id: stored.track_id.as_str(),
            readiness_score: result.readiness_score,
            readiness_tier: result.readiness_tier.slug(),
            missing_skills: result.missing_skills.join(";"),
            weak_skills: result.weak_skills.join(";"),
            created_at: result.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

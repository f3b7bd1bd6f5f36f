use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::analyzer::{analyze, GapAnalysis};
use super::domain::{AssessmentResult, IngestionError, Track, UserSkill};
use super::report::assemble;
use crate::config::AssessmentConfig;

/// Source of report timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock that never hands out a time earlier than one it already issued.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl Clock for MonotonicClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let issued = match *last {
            Some(previous) if previous > now => previous,
            _ => now,
        };
        *last = Some(issued);
        issued
    }
}

/// Runs the gap analyzer and report assembler against a shared clock.
pub struct ReadinessEngine {
    config: AssessmentConfig,
    clock: Box<dyn Clock>,
}

impl ReadinessEngine {
    pub fn new(config: AssessmentConfig) -> Self {
        Self::with_clock(config, Box::new(MonotonicClock::default()))
    }

    pub fn with_clock(config: AssessmentConfig, clock: Box<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Analysis without the report, for callers that only need the gap entries.
    pub fn analyze(
        &self,
        track: &Track,
        user_skills: &[UserSkill],
    ) -> Result<GapAnalysis, IngestionError> {
        analyze(track, user_skills)
    }

    pub fn run_gap_analysis(
        &self,
        track: &Track,
        user_skills: &[UserSkill],
    ) -> Result<AssessmentResult, IngestionError> {
        let analysis = analyze(track, user_skills)?;
        Ok(assemble(
            &track.id,
            &track.name,
            &analysis,
            self.config.suggested_action_limit,
            self.clock.now(),
        ))
    }
}

impl Default for ReadinessEngine {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

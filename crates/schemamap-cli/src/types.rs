use std::path::PathBuf;

use schemamap_model::{MatchReport, ScoreDetail};
use schemamap_report::RunSettings;

pub struct MapResult {
    pub report: MatchReport,
    pub settings: RunSettings,
    pub written: Vec<PathBuf>,
}

pub struct ScoreOutcome {
    pub source: String,
    pub target: String,
    pub detail: ScoreDetail,
}

pub mod detail;
pub mod mapping;
pub mod report;

pub use detail::{MatchMethod, ScoreDetail, Signals};
pub use mapping::{AssignMode, Confidence, MappingDecision};
pub use report::MatchReport;

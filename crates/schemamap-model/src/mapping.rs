//! Mapping decisions: the per-source-column outcome of an assignment run.

use serde::{Deserialize, Serialize};

use crate::detail::MatchMethod;

/// Assignment strategy for an `assign` run.
///
/// One-to-one is the default: each target column is claimed by at most one
/// source. Many-to-one lets every source pick its best target independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignMode {
    #[default]
    OneToOne,
    ManyToOne,
}

/// Interpretive confidence band for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    /// Below the lowest band, or below the caller's threshold.
    NoMatch,
    /// Score in [0.35, 0.75).
    Low,
    /// Score in [0.75, 0.95).
    Probable,
    /// Score >= 0.95.
    High,
}

impl Confidence {
    /// Band boundaries are fixed; they do not move with the caller's threshold.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.95 {
            Self::High
        } else if score >= 0.75 {
            Self::Probable
        } else if score >= 0.35 {
            Self::Low
        } else {
            Self::NoMatch
        }
    }

    /// Human-readable label for review output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High-confidence match",
            Self::Probable => "Probable match - review",
            Self::Low => "Low confidence - manual review",
            Self::NoMatch => "no match",
        }
    }
}

/// Final decision for one source column. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingDecision {
    /// Source column name as supplied.
    pub source_column: String,
    /// Chosen target column, `None` when no candidate reached the threshold.
    pub target_column: Option<String>,
    /// Composite score of the chosen (or best rejected) candidate,
    /// 4 decimal places.
    pub score: f64,
    /// Confidence band; always [`Confidence::NoMatch`] for unmapped rows.
    pub confidence: Confidence,
    /// Dominant signal of the chosen candidate.
    pub method: Option<MatchMethod>,
}

impl MappingDecision {
    /// True when a target was assigned.
    pub fn is_mapped(&self) -> bool {
        self.target_column.is_some()
    }

    /// Score rounded to 2 decimal places for display; the 4-decimal value
    /// stays in [`Self::score`].
    pub fn display_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }

    /// Method label for display, empty when no candidate existed.
    pub fn method_label(&self) -> String {
        self.method
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bands() {
        assert_eq!(Confidence::from_score(1.0), Confidence::High);
        assert_eq!(Confidence::from_score(0.95), Confidence::High);
        assert_eq!(Confidence::from_score(0.80), Confidence::Probable);
        assert_eq!(Confidence::from_score(0.75), Confidence::Probable);
        assert_eq!(Confidence::from_score(0.50), Confidence::Low);
        assert_eq!(Confidence::from_score(0.35), Confidence::Low);
        assert_eq!(Confidence::from_score(0.34), Confidence::NoMatch);
    }

    #[test]
    fn display_score_rounds_to_two_places() {
        let decision = MappingDecision {
            source_column: "emp_id".to_string(),
            target_column: Some("EmployeeID".to_string()),
            score: 0.4995,
            confidence: Confidence::Low,
            method: Some(MatchMethod::Token(0.5)),
        };
        assert!((decision.display_score() - 0.5).abs() < f64::EPSILON);
        assert!(decision.is_mapped());
    }
}

//! The full assignment result: decisions plus the complete score matrix.

use serde::{Deserialize, Serialize};

use crate::detail::ScoreDetail;
use crate::mapping::MappingDecision;

/// Everything an assignment run produced. Read-only after construction.
///
/// The matrix keeps every (source, target) pair that was evaluated, not just
/// the winners, so callers can audit why a mapping was (or was not) chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    source_columns: Vec<String>,
    target_columns: Vec<String>,
    decisions: Vec<MappingDecision>,
    matrix: Vec<Vec<ScoreDetail>>,
}

impl MatchReport {
    pub fn new(
        source_columns: Vec<String>,
        target_columns: Vec<String>,
        decisions: Vec<MappingDecision>,
        matrix: Vec<Vec<ScoreDetail>>,
    ) -> Self {
        Self {
            source_columns,
            target_columns,
            decisions,
            matrix,
        }
    }

    pub fn source_columns(&self) -> &[String] {
        &self.source_columns
    }

    pub fn target_columns(&self) -> &[String] {
        &self.target_columns
    }

    /// One decision per source column, in source order.
    pub fn decisions(&self) -> &[MappingDecision] {
        &self.decisions
    }

    /// The dense score matrix, indexed `[source][target]`.
    pub fn matrix(&self) -> &[Vec<ScoreDetail>] {
        &self.matrix
    }

    /// All candidates for one source, ranked by descending score.
    ///
    /// Ties keep target enumeration order. Returns an empty list for an
    /// out-of-range index.
    pub fn ranked_candidates(&self, source_index: usize) -> Vec<(&str, &ScoreDetail)> {
        let Some(row) = self.matrix.get(source_index) else {
            return Vec::new();
        };
        let mut ranked: Vec<(&str, &ScoreDetail)> = self
            .target_columns
            .iter()
            .zip(row.iter())
            .map(|(name, detail)| (name.as_str(), detail))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.score
                .partial_cmp(&a.1.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn mapped_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.is_mapped()).count()
    }

    pub fn unmapped_count(&self) -> usize {
        self.decisions.len() - self.mapped_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::MatchMethod;
    use crate::mapping::Confidence;

    fn detail(score: f64) -> ScoreDetail {
        ScoreDetail::shortcut(score, MatchMethod::Substring)
    }

    fn report() -> MatchReport {
        MatchReport::new(
            vec!["a".to_string()],
            vec!["x".to_string(), "y".to_string()],
            vec![MappingDecision {
                source_column: "a".to_string(),
                target_column: Some("y".to_string()),
                score: 0.9,
                confidence: Confidence::Probable,
                method: Some(MatchMethod::Substring),
            }],
            vec![vec![detail(0.2), detail(0.9)]],
        )
    }

    #[test]
    fn ranked_candidates_sorted_descending() {
        let report = report();
        let ranked = report.ranked_candidates(0);
        assert_eq!(ranked[0].0, "y");
        assert_eq!(ranked[1].0, "x");
        assert!(report.ranked_candidates(5).is_empty());
    }

    #[test]
    fn counts_mapped_and_unmapped() {
        let report = report();
        assert_eq!(report.mapped_count(), 1);
        assert_eq!(report.unmapped_count(), 0);
    }
}

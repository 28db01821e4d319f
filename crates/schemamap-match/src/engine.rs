//! The matching engine: score matrix construction and target assignment.

use std::cmp::Ordering;

use tracing::{debug, warn};

use schemamap_model::{AssignMode, Confidence, MappingDecision, MatchReport, ScoreDetail};

use crate::score::score_pair;
use crate::vocabulary::Vocabulary;

/// Default minimum score for a pair to be reported as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.35;

/// Stateless matcher over two column-name lists.
///
/// Construction only captures the vocabulary; every call computes fresh
/// results, so one engine can be reused across schema pairs.
///
/// # Example
///
/// ```
/// use schemamap_match::{DEFAULT_THRESHOLD, MatchEngine};
/// use schemamap_model::AssignMode;
///
/// let engine = MatchEngine::new();
/// let sources = vec!["emp_id".to_string()];
/// let targets = vec!["EmployeeID".to_string()];
/// let report = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);
/// assert_eq!(report.decisions().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    vocabulary: Vocabulary,
}

struct Candidate {
    source: usize,
    target: usize,
    score: f64,
}

impl MatchEngine {
    /// Engine with the built-in vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an injected vocabulary (alternate synonym/affix tables).
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Score a single (source, target) name pair.
    pub fn score(&self, source: &str, target: &str) -> ScoreDetail {
        score_pair(&self.vocabulary, source, target)
    }

    /// Map every source column to at most one target column.
    ///
    /// Scores every pair unconditionally (`O(|sources| x |targets|)`), then
    /// assigns targets greedily by descending score. Pairs below `threshold`
    /// are reported unmapped but keep their best candidate's score and
    /// method for review.
    ///
    /// A `threshold` outside [0.0, 1.0] is a caller contract violation and
    /// is clamped into range with a warning.
    pub fn assign(
        &self,
        sources: &[String],
        targets: &[String],
        threshold: f64,
        mode: AssignMode,
    ) -> MatchReport {
        let threshold = clamp_threshold(threshold);

        let matrix: Vec<Vec<ScoreDetail>> = sources
            .iter()
            .map(|source| {
                targets
                    .iter()
                    .map(|target| self.score(source, target))
                    .collect()
            })
            .collect();

        let chosen = match mode {
            AssignMode::OneToOne => assign_one_to_one(&matrix, targets.len()),
            AssignMode::ManyToOne => assign_many_to_one(&matrix),
        };

        let decisions: Vec<MappingDecision> = sources
            .iter()
            .enumerate()
            .map(|(source_index, source)| {
                decide(source, targets, &matrix[source_index], chosen[source_index], threshold)
            })
            .collect();

        debug!(
            sources = sources.len(),
            targets = targets.len(),
            mapped = decisions.iter().filter(|d| d.is_mapped()).count(),
            ?mode,
            threshold,
            "assignment complete"
        );

        MatchReport::new(sources.to_vec(), targets.to_vec(), decisions, matrix)
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if (0.0..=1.0).contains(&threshold) {
        threshold
    } else {
        let clamped = threshold.clamp(0.0, 1.0);
        warn!(threshold, clamped, "threshold outside [0, 1], clamping");
        clamped
    }
}

/// Greedy maximum-weight matching approximation.
///
/// Flattens every pair with a positive score, sorts by descending score
/// (the stable sort keeps source-then-target enumeration order on ties,
/// which makes tie-breaking deterministic), and scans once: a pair is
/// accepted when its target is unclaimed and it strictly improves on what
/// its source already holds. Not globally optimal by design.
fn assign_one_to_one(matrix: &[Vec<ScoreDetail>], target_count: usize) -> Vec<Option<(usize, f64)>> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for (source, row) in matrix.iter().enumerate() {
        for (target, detail) in row.iter().enumerate() {
            if detail.score > 0.0 {
                candidates.push(Candidate {
                    source,
                    target,
                    score: detail.score,
                });
            }
        }
    }
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut chosen: Vec<Option<(usize, f64)>> = vec![None; matrix.len()];
    let mut claimed = vec![false; target_count];
    for candidate in candidates {
        if chosen[candidate.source].is_some_and(|(_, best)| best >= candidate.score) {
            continue;
        }
        if claimed[candidate.target] {
            continue;
        }
        chosen[candidate.source] = Some((candidate.target, candidate.score));
        claimed[candidate.target] = true;
    }
    chosen
}

/// Each source independently picks its best target; targets may repeat.
fn assign_many_to_one(matrix: &[Vec<ScoreDetail>]) -> Vec<Option<(usize, f64)>> {
    matrix
        .iter()
        .map(|row| {
            let mut best: Option<(usize, f64)> = None;
            for (target, detail) in row.iter().enumerate() {
                if detail.score > best.map_or(0.0, |(_, score)| score) {
                    best = Some((target, detail.score));
                }
            }
            best
        })
        .collect()
}

fn decide(
    source: &str,
    targets: &[String],
    row: &[ScoreDetail],
    chosen: Option<(usize, f64)>,
    threshold: f64,
) -> MappingDecision {
    match chosen {
        Some((target_index, score)) if score >= threshold => MappingDecision {
            source_column: source.to_string(),
            target_column: Some(targets[target_index].clone()),
            score,
            confidence: Confidence::from_score(score),
            method: row[target_index].method.clone(),
        },
        // Below threshold: no suitable target found, but keep the best
        // candidate's diagnostics for review.
        Some((target_index, score)) => MappingDecision {
            source_column: source.to_string(),
            target_column: None,
            score,
            confidence: Confidence::NoMatch,
            method: row[target_index].method.clone(),
        },
        None => MappingDecision {
            source_column: source.to_string(),
            target_column: None,
            score: 0.0,
            confidence: Confidence::NoMatch,
            method: None,
        },
    }
}

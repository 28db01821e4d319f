//! Composite pair scoring: shortcuts, five similarity signals, method labels.

use std::collections::BTreeSet;

use schemamap_model::{MatchMethod, ScoreDetail, Signals};

use crate::normalize::{normalize, remove_underscores, tokenize};
use crate::sequence;
use crate::vocabulary::Vocabulary;

const EXACT_SCORE: f64 = 1.0;
const UNDERSCORE_INSENSITIVE_SCORE: f64 = 0.98;

const W_TOKEN_OVERLAP: f64 = 0.35;
const W_TOKEN_SUBSCORE: f64 = 0.20;
const W_SEQ_RATIO: f64 = 0.18;
const W_NGRAM_JACCARD: f64 = 0.12;
const W_SUBSTRING: f64 = 0.10;

/// Signal value reported when one normalized name contains the other.
const SUBSTRING_SIGNAL: f64 = 0.75;
/// Added when both names end in the same digit run (addr1 vs address1).
const NUMERIC_SUFFIX_BONUS: f64 = 0.05;

const TOKEN_CONTAINED: f64 = 0.8;
const TOKEN_FUZZY_WEIGHT: f64 = 0.6;

const LABEL_TOKEN_STRONG_OVERLAP: f64 = 0.8;
const LABEL_TOKEN_STRONG_SUBSCORE: f64 = 0.95;
const LABEL_TOKEN_OVERLAP: f64 = 0.4;
const LABEL_NGRAM: f64 = 0.45;
const LABEL_FUZZY: f64 = 0.75;

const NGRAM_LEN: usize = 3;

/// Score one (source, target) pair. Total over all inputs; empty names
/// yield a zero score with an empty detail.
pub(crate) fn score_pair(vocabulary: &Vocabulary, source: &str, target: &str) -> ScoreDetail {
    if source.is_empty() || target.is_empty() {
        return ScoreDetail::empty();
    }

    let source_norm = normalize(source);
    let target_norm = normalize(target);

    if source_norm == target_norm {
        return ScoreDetail::shortcut(EXACT_SCORE, MatchMethod::Exact);
    }
    if remove_underscores(&source_norm) == remove_underscores(&target_norm) {
        return ScoreDetail::shortcut(
            UNDERSCORE_INSENSITIVE_SCORE,
            MatchMethod::UnderscoreRemoved,
        );
    }

    let source_tokens = tokenize(vocabulary, source);
    let target_tokens = tokenize(vocabulary, target);

    let signals = Signals {
        token_overlap: token_overlap(&source_tokens, &target_tokens),
        token_subscore: token_subscore(&source_tokens, &target_tokens),
        seq_ratio: sequence::ratio(&source_norm, &target_norm),
        ngram_jaccard: jaccard(&trigram_set(&source_norm), &trigram_set(&target_norm)),
        substr_flag: substring_signal(&source_norm, &target_norm),
        numeric_suffix_bonus: numeric_suffix_bonus(&source_norm, &target_norm),
    };

    let combined = W_TOKEN_OVERLAP * signals.token_overlap
        + W_TOKEN_SUBSCORE * signals.token_subscore
        + W_SEQ_RATIO * signals.seq_ratio
        + W_NGRAM_JACCARD * signals.ngram_jaccard
        + W_SUBSTRING * signals.substr_flag
        + signals.numeric_suffix_bonus;
    let score = round4(combined.min(1.0));

    ScoreDetail {
        score,
        method: Some(method_label(&signals)),
        signals,
    }
}

/// First label whose trigger fires wins; FuzzyLow is the fallback.
fn method_label(signals: &Signals) -> MatchMethod {
    if signals.token_overlap >= LABEL_TOKEN_STRONG_OVERLAP
        || signals.token_subscore >= LABEL_TOKEN_STRONG_SUBSCORE
    {
        MatchMethod::TokenStrong(signals.token_overlap)
    } else if signals.token_overlap >= LABEL_TOKEN_OVERLAP {
        MatchMethod::Token(signals.token_overlap)
    } else if signals.ngram_jaccard >= LABEL_NGRAM {
        MatchMethod::NGram(signals.ngram_jaccard)
    } else if signals.seq_ratio >= LABEL_FUZZY {
        MatchMethod::Fuzzy(signals.seq_ratio)
    } else if signals.substr_flag > 0.0 {
        MatchMethod::Substring
    } else {
        MatchMethod::FuzzyLow(signals.seq_ratio)
    }
}

/// Shared tokens over the average token-set size; 0 if either side is empty.
fn token_overlap(source_tokens: &[String], target_tokens: &[String]) -> f64 {
    if source_tokens.is_empty() || target_tokens.is_empty() {
        return 0.0;
    }
    let source_set: BTreeSet<&str> = source_tokens.iter().map(String::as_str).collect();
    let target_set: BTreeSet<&str> = target_tokens.iter().map(String::as_str).collect();
    let shared = source_set.intersection(&target_set).count() as f64;
    let average = (source_set.len() + target_set.len()) as f64 / 2.0;
    shared / average
}

/// Best single token-pair agreement: equality beats containment beats a
/// down-weighted sequence ratio.
fn token_subscore(source_tokens: &[String], target_tokens: &[String]) -> f64 {
    let mut best = 0.0_f64;
    for left in source_tokens {
        for right in target_tokens {
            let pair = if left == right {
                1.0
            } else if left.contains(right.as_str()) || right.contains(left.as_str()) {
                TOKEN_CONTAINED
            } else {
                TOKEN_FUZZY_WEIGHT * sequence::ratio(left, right)
            };
            best = best.max(pair);
        }
    }
    best
}

/// Character trigrams of the `[a-z0-9]` content of a normalized name.
/// A cleaned string shorter than the shingle length becomes a single-element
/// set (or an empty set when nothing is left).
fn trigram_set(normalized: &str) -> BTreeSet<String> {
    let cleaned: Vec<char> = normalized
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    let mut shingles = BTreeSet::new();
    if cleaned.is_empty() {
        return shingles;
    }
    if cleaned.len() < NGRAM_LEN {
        shingles.insert(cleaned.into_iter().collect());
        return shingles;
    }
    for window in cleaned.windows(NGRAM_LEN) {
        shingles.insert(window.iter().collect());
    }
    shingles
}

fn jaccard(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f64 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection(right).count() as f64;
    let union = left.union(right).count() as f64;
    shared / union
}

fn substring_signal(source_norm: &str, target_norm: &str) -> f64 {
    if source_norm.contains(target_norm) || target_norm.contains(source_norm) {
        SUBSTRING_SIGNAL
    } else {
        0.0
    }
}

fn numeric_suffix_bonus(source_norm: &str, target_norm: &str) -> f64 {
    let source_digits = trailing_digits(source_norm);
    let target_digits = trailing_digits(target_norm);
    if !source_digits.is_empty() && source_digits == target_digits {
        NUMERIC_SUFFIX_BONUS
    } else {
        0.0
    }
}

fn trailing_digits(normalized: &str) -> &str {
    match normalized.rfind(|ch: char| !ch.is_ascii_digit()) {
        Some(idx) => &normalized[idx + 1..],
        None => normalized,
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(source: &str, target: &str) -> ScoreDetail {
        score_pair(&Vocabulary::default(), source, target)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn exact_match_scores_one() {
        let detail = score("customer_id", "customer_id");
        assert_close(detail.score, 1.0);
        assert_eq!(detail.method, Some(MatchMethod::Exact));
    }

    #[test]
    fn underscore_insensitive_match() {
        let detail = score("CustomerID", "customer_id");
        assert_close(detail.score, 0.98);
        assert_eq!(detail.method, Some(MatchMethod::UnderscoreRemoved));
    }

    #[test]
    fn empty_names_score_zero() {
        assert_close(score("", "anything").score, 0.0);
        assert_close(score("x", "").score, 0.0);
        assert_eq!(score("", "").method, None);
    }

    #[test]
    fn composite_score_matches_hand_computation() {
        // token_overlap 0.4, token_subscore 1.0, seq_ratio 10/19,
        // ngram_jaccard 2/11, substring 0, suffix bonus 0.05
        let detail = score("addr1", "address_line_1");
        assert_close(detail.signals.token_overlap, 0.4);
        assert_close(detail.signals.token_subscore, 1.0);
        assert_close(detail.signals.seq_ratio, 10.0 / 19.0);
        assert_close(detail.signals.ngram_jaccard, 2.0 / 11.0);
        assert_close(detail.signals.numeric_suffix_bonus, 0.05);
        assert_close(detail.score, 0.5066);
    }

    #[test]
    fn numeric_suffix_bonus_requires_identical_runs() {
        let matching = score("addr1", "address_line_1");
        let differing = score("addr1", "address_line_2");
        assert_close(matching.signals.numeric_suffix_bonus, 0.05);
        assert_close(differing.signals.numeric_suffix_bonus, 0.0);
        assert!(matching.score > differing.score);
    }

    #[test]
    fn substring_signal_reports_three_quarters() {
        let detail = score("order", "purchase_order_hdr");
        assert_close(detail.signals.substr_flag, 0.75);
    }

    #[test]
    fn scores_are_rounded_to_four_places() {
        let detail = score("emp_id", "EmployeeID");
        assert_close(detail.score * 10_000.0, (detail.score * 10_000.0).round());
    }

    #[test]
    fn method_prefers_token_signals() {
        // Identical token sets after synonym mapping, but different strings.
        let detail = score("dept_cd", "dept_code");
        assert!(matches!(detail.method, Some(MatchMethod::TokenStrong(_))));
    }

    #[test]
    fn custom_vocabulary_changes_token_signals() {
        let synonyms = [("kunde".to_string(), "customer".to_string())]
            .into_iter()
            .collect();
        let vocabulary = Vocabulary::new(synonyms, Vec::new(), Vec::new());
        let custom = score_pair(&vocabulary, "kunde_nr", "customer_nr");
        let builtin = score("kunde_nr", "customer_nr");
        assert!(custom.score > builtin.score);
    }
}

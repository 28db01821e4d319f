//! Per-pair scoring detail: which signal won and the raw signal values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which signal dominated a pair's composite score.
///
/// Variants carrying a value hold the signal reading that triggered the
/// label, so reviewers can see how close a call was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchMethod {
    /// Normalized forms are identical.
    Exact,
    /// Normalized forms are identical once underscores are removed.
    UnderscoreRemoved,
    /// Strong token agreement (overlap >= 0.8 or a near-exact token pair).
    TokenStrong(f64),
    /// Moderate token overlap (>= 0.4).
    Token(f64),
    /// Trigram Jaccard similarity >= 0.45.
    NGram(f64),
    /// Whole-string sequence similarity >= 0.75.
    Fuzzy(f64),
    /// One normalized name contains the other.
    Substring,
    /// None of the above fired; value is the sequence similarity.
    FuzzyLow(f64),
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::UnderscoreRemoved => write!(f, "UnderscoreRemoved"),
            Self::TokenStrong(v) => write!(f, "TokenStrong({v:.2})"),
            Self::Token(v) => write!(f, "Token({v:.2})"),
            Self::NGram(v) => write!(f, "NGram({v:.2})"),
            Self::Fuzzy(v) => write!(f, "Fuzzy({v:.2})"),
            Self::Substring => write!(f, "Substring"),
            Self::FuzzyLow(v) => write!(f, "FuzzyLow({v:.2})"),
        }
    }
}

/// Raw values of the five composite signals plus the numeric-suffix bonus.
///
/// Zeroed for pairs decided by the exact or underscore shortcuts, which skip
/// the composite computation entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    /// Shared tokens over the average token-set size.
    pub token_overlap: f64,
    /// Best single token-pair agreement.
    pub token_subscore: f64,
    /// Sequence similarity over the full normalized strings.
    pub seq_ratio: f64,
    /// Jaccard similarity of character trigrams.
    pub ngram_jaccard: f64,
    /// 0.75 when one normalized name contains the other, else 0.
    pub substr_flag: f64,
    /// 0.05 when both names end in the same digit run, else 0.
    pub numeric_suffix_bonus: f64,
}

/// Immutable scoring record for one (source, target) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    /// Composite score in [0.0, 1.0], rounded to 4 decimal places.
    pub score: f64,
    /// Dominant signal, `None` when either input name was empty.
    pub method: Option<MatchMethod>,
    /// Raw signal breakdown.
    pub signals: Signals,
}

impl ScoreDetail {
    /// Detail for a pair involving an empty name: zero everywhere.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            method: None,
            signals: Signals::default(),
        }
    }

    /// Detail for a shortcut decision (exact or underscore-insensitive).
    pub fn shortcut(score: f64, method: MatchMethod) -> Self {
        Self {
            score,
            method: Some(method),
            signals: Signals::default(),
        }
    }

    /// Method label for display, empty for empty-input pairs.
    pub fn method_label(&self) -> String {
        self.method
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Human-readable breakdown of the signal values.
    pub fn explain(&self) -> String {
        let s = &self.signals;
        format!(
            "token_overlap: {:.2}; token_subscore: {:.2}; seq_ratio: {:.2}; \
             ngram_jaccard: {:.2}; substr_flag: {:.2}; numeric_suffix_bonus: {:.2}",
            s.token_overlap,
            s.token_subscore,
            s.seq_ratio,
            s.ngram_jaccard,
            s.substr_flag,
            s.numeric_suffix_bonus,
        )
    }
}

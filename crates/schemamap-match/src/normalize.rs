//! Name canonicalization: normalized forms and token sequences.

use crate::vocabulary::Vocabulary;

/// Canonicalize a raw column name for comparison.
///
/// Lowercases, replaces every run of characters outside `[0-9a-z_]` with a
/// single underscore, collapses repeated underscores, and trims leading and
/// trailing underscores. Deterministic and idempotent; an empty or
/// all-separator input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    out
}

/// Split a raw name into canonical tokens.
///
/// Word boundaries come from separators, lower-to-upper CamelCase
/// transitions, and alphabetic/digit transitions, so `customer2`,
/// `CustomerID` and `customer_id` all tokenize consistently. Each token is
/// passed through the vocabulary's synonym table. Order is preserved.
pub fn tokenize(vocabulary: &Vocabulary, raw: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if prev_lower && ch.is_ascii_uppercase() {
                spaced.push('_');
            }
            spaced.push(ch);
            prev_lower = ch.is_ascii_lowercase();
        } else {
            spaced.push('_');
            prev_lower = false;
        }
    }
    let normalized = normalize(&spaced);
    let mut tokens = Vec::new();
    for part in normalized.split('_') {
        if part.is_empty() {
            continue;
        }
        for run in split_digit_runs(part) {
            tokens.push(vocabulary.canonical_token(run));
        }
    }
    tokens
}

/// Strip known structural affixes from a normalized name.
///
/// Optional normalization variant; the reference scoring pipeline does not
/// use it.
pub fn strip_affixes(vocabulary: &Vocabulary, name: &str) -> String {
    let mut stripped = name.to_string();
    for prefix in vocabulary.prefixes() {
        if let Some(rest) = stripped.strip_prefix(prefix.as_str()) {
            stripped = rest.to_string();
        }
    }
    for suffix in vocabulary.suffixes() {
        if let Some(rest) = stripped.strip_suffix(suffix.as_str()) {
            stripped = rest.to_string();
        }
    }
    stripped
}

pub(crate) fn remove_underscores(normalized: &str) -> String {
    normalized.replace('_', "")
}

/// Split an alphanumeric chunk into maximal alphabetic and digit runs.
fn split_digit_runs(part: &str) -> Vec<&str> {
    let bytes = part.as_bytes();
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..bytes.len() {
        if bytes[i].is_ascii_digit() != bytes[i - 1].is_ascii_digit() {
            runs.push(&part[start..i]);
            start = i;
        }
    }
    if !bytes.is_empty() {
        runs.push(&part[start..]);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize("  Customer--ID  "), "customer_id");
        assert_eq!(normalize("a__b"), "a_b");
        assert_eq!(normalize("__x__"), "x");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        for raw in ["Customer ID", "addr.line/1", "ÜBER_col", "  spaced  "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn tokenize_splits_separators_camel_case_and_digits() {
        let vocabulary = Vocabulary::default();
        assert_eq!(tokenize(&vocabulary, "customer2"), vec!["customer", "2"]);
        assert_eq!(tokenize(&vocabulary, "EmployeeID"), vec!["employee", "id"]);
        assert_eq!(
            tokenize(&vocabulary, "created_on"),
            vec!["created", "on"]
        );
        assert!(tokenize(&vocabulary, "").is_empty());
        assert!(tokenize(&vocabulary, "--").is_empty());
    }

    #[test]
    fn tokenize_applies_synonyms() {
        let vocabulary = Vocabulary::default();
        assert_eq!(tokenize(&vocabulary, "dept_cd"), vec!["dept", "code"]);
        assert_eq!(
            tokenize(&vocabulary, "item_desc"),
            vec!["item", "description"]
        );
    }

    #[test]
    fn strip_affixes_removes_known_prefixes_and_suffixes() {
        let vocabulary = Vocabulary::default();
        assert_eq!(strip_affixes(&vocabulary, "is_active_flag"), "active");
        assert_eq!(strip_affixes(&vocabulary, "tbl_users"), "users");
        assert_eq!(strip_affixes(&vocabulary, "deleted_yn"), "deleted");
        assert_eq!(strip_affixes(&vocabulary, "plain"), "plain");
    }
}

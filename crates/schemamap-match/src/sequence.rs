//! Longest-matching-blocks similarity ratio (Ratcliff/Obershelp).
//!
//! Recursively finds the longest common block, then matches the pieces to
//! its left and right, and reports `2 * matched / total_length`. This is a
//! specific algorithm, not an edit-distance ratio: substituting a
//! Levenshtein-based measure changes every composite score downstream.

use std::collections::HashMap;

/// Similarity ratio of two strings in [0.0, 1.0].
///
/// Two empty strings are considered identical (ratio 1.0).
pub fn ratio(left: &str, right: &str) -> f64 {
    let a: Vec<char> = left.chars().collect();
    let b: Vec<char> = right.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (besti, bestj, size) = longest_match(a, &positions, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            pending.push((alo, besti, blo, bestj));
            pending.push((besti + size, ahi, bestj + size, bhi));
        }
    }
    matched
}

/// Longest block `a[besti..besti+size] == b[bestj..bestj+size]` within the
/// given window. Ties resolve to the earliest position in `a`, then in `b`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut besti = alo;
    let mut bestj = blo;
    let mut bestsize = 0;
    // run_lengths[j] = length of the common run ending at a[i], b[j]
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(indices) = positions.get(&a[i]) {
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = match j.checked_sub(1) {
                    Some(prev) => run_lengths.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next_runs.insert(j, len);
                if len > bestsize {
                    besti = i + 1 - len;
                    bestj = j + 1 - len;
                    bestsize = len;
                }
            }
        }
        run_lengths = next_runs;
    }
    (besti, bestj, bestsize)
}

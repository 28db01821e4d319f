//! Injected matching vocabulary: token synonyms and structural affixes.
//!
//! The engine never consults global state; tests can substitute an alternate
//! vocabulary without touching the scoring algorithm.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Synonym table and affix lists used during tokenization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    synonyms: BTreeMap<String, String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl Default for Vocabulary {
    /// Built-in vocabulary covering abbreviations that commonly differ
    /// between relational systems.
    fn default() -> Self {
        let synonyms = [
            ("desc", "description"),
            ("descr", "description"),
            ("cd", "code"),
            ("pk", "id"),
            ("uid", "id"),
            ("nm", "name"),
            ("createdby", "created_by"),
            ("modifiedby", "modified_by"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
        let prefixes = ["is_", "has_", "the_", "tbl_", "fk_"]
            .into_iter()
            .map(String::from)
            .collect();
        let suffixes = ["_flag", "_yn"].into_iter().map(String::from).collect();
        Self {
            synonyms,
            prefixes,
            suffixes,
        }
    }
}

impl Vocabulary {
    pub fn new(
        synonyms: BTreeMap<String, String>,
        prefixes: Vec<String>,
        suffixes: Vec<String>,
    ) -> Self {
        Self {
            synonyms,
            prefixes,
            suffixes,
        }
    }

    /// Canonical form of a token: the synonym mapping, or the token itself.
    pub fn canonical_token(&self, token: &str) -> String {
        self.synonyms
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

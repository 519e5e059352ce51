//! Finds which vocabulary skills appear in a piece of text.
//!
//! Default behaviour is plain substring containment on lower-cased text, so a
//! short skill hidden inside a longer word still counts ("go" in "negotiator",
//! "rust" in "trusted"). `WordBoundary` mode is an explicit opt-in that only
//! accepts occurrences not glued to other alphanumerics.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::skills::vocabulary;

/// Lower-cased canonical skills found in one document.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatchMode {
    #[default]
    Substring,
    WordBoundary,
}

impl FromStr for SkillMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "word_boundary" | "word-boundary" => Ok(Self::WordBoundary),
            other => Err(format!(
                "unknown skill match mode '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillExtractor {
    mode: SkillMatchMode,
}

impl SkillExtractor {
    pub fn new(mode: SkillMatchMode) -> Self {
        Self { mode }
    }

    /// Returns every vocabulary skill present in `text`.
    pub fn extract(&self, text: &str) -> SkillSet {
        let haystack = text.to_lowercase();
        vocabulary::lowercased()
            .iter()
            .filter(|skill| match self.mode {
                SkillMatchMode::Substring => haystack.contains(skill.as_str()),
                SkillMatchMode::WordBoundary => contains_bounded(&haystack, skill),
            })
            .cloned()
            .collect()
    }
}

/// Substring-mode extraction against the built-in vocabulary.
pub fn extract_skills(text: &str) -> SkillSet {
    SkillExtractor::default().extract(text)
}

fn contains_bounded(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

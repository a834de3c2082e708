//! Resolved per-decision attribute bundle.

use serde::{Deserialize, Serialize};

use crate::types::format::IndexerFlag;
use crate::types::language::Language;
use crate::types::quality::{Quality, Revision};

/// Subtitle metadata resolved for a companion subtitle file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleInfo {
    /// Title portion of the subtitle name, absent in basic parse mode.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// A custom format that matched a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedFormat {
    pub format_id: i32,
    pub name: String,
}

/// The trusted attribute set for one candidate, built once per evaluation
/// and immutable thereafter. Re-evaluation requires a fresh build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateAttributes {
    /// Non-empty, ordered, deduplicated; never contains `Original`.
    pub languages: Vec<Language>,
    pub quality: Quality,
    pub revision: Revision,
    /// Empty string when no edition was resolved.
    pub edition: String,
    /// Empty string when no release group was resolved.
    pub release_group: String,
    #[serde(default)]
    pub subtitle: Option<SubtitleInfo>,
    pub release_title: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub indexer_flags: Vec<IndexerFlag>,
    #[serde(default)]
    pub matched_formats: Vec<MatchedFormat>,
    #[serde(default)]
    pub format_score: i32,
}

impl CandidateAttributes {
    /// Attach format evaluation results, consuming the bundle so the final
    /// attribute set is constructed exactly once.
    pub fn with_formats(mut self, matched: Vec<MatchedFormat>, score: i32) -> Self {
        self.matched_formats = matched;
        self.format_score = score;
        self
    }
}

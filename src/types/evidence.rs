//! Collaborator-supplied evidence about one candidate release.
//!
//! The engine never assumes internal structure beyond these fields; all
//! optional sources default to absent and absence is never an error.

use serde::{Deserialize, Serialize};

use crate::types::format::IndexerFlag;
use crate::types::language::Language;

/// Download-client-reported metadata for the grabbed item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadClientItem {
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub release_group: Option<String>,
}

/// Embedded media metadata extracted by an external collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// ISO-639 audio track codes, e.g. `["eng", "fra"]`.
    #[serde(default)]
    pub audio_language_codes: Vec<String>,
}

/// Prior grab-history record for this release, when one exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrabHistory {
    /// Release title as it was originally grabbed.
    pub source_title: String,
}

/// Per-indexer settings relevant to language resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerSettings {
    /// Languages implied when the indexer marks a release as multi-language.
    #[serde(default)]
    pub multi_languages: Vec<Language>,
}

/// Everything known about one candidate release before resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub file_name: String,
    pub folder_name: String,
    /// Original release title as reported by the indexer. Falls back to the
    /// file name for matching when empty (local-import case).
    #[serde(default)]
    pub release_title: String,
    /// Languages declared by the release's own metadata, used verbatim as
    /// the seed when non-empty.
    #[serde(default)]
    pub declared_languages: Vec<Language>,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub indexer_flags: Vec<IndexerFlag>,
    #[serde(default)]
    pub download_client: Option<DownloadClientItem>,
    #[serde(default)]
    pub media_info: Option<MediaInfo>,
    #[serde(default)]
    pub history: Option<GrabHistory>,
    #[serde(default)]
    pub indexer: Option<IndexerSettings>,
    /// Companion subtitle file, when one was imported alongside the release.
    #[serde(default)]
    pub subtitle_file_name: Option<String>,
}

impl Evidence {
    /// Text used for title-based parsing and pattern specifications.
    pub fn title_for_matching(&self) -> &str {
        if self.release_title.trim().is_empty() {
            &self.file_name
        } else {
            &self.release_title
        }
    }
}

/// Catalog context for the game a candidate belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    pub title: String,
    #[serde(default)]
    pub original_language: Language,
    #[serde(default)]
    pub catalog_id: i64,
}

//! Signal augmenters: one stateless strategy per evidence source.
//!
//! The source set is a closed sum type so the resolver's precedence logic
//! stays exhaustive at compile time. Language and quality both use
//! confidence-ranked fusion; edition and release-group use a separate
//! first-non-blank fallback chain in `engine::resolve::fallback`. The two
//! disciplines are deliberately not unified.

pub mod download_client;
pub mod file_name;
pub mod folder_name;
pub mod history;
pub mod media_info;

use serde::{Deserialize, Serialize};

use crate::types::evidence::{Evidence, GameContext};
use crate::types::language::Language;
use crate::types::quality::{Quality, Revision};

/// Ranking tag for competing language proposals. Variant order is the
/// precedence order: later variants override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageConfidence {
    History,
    FileName,
    FolderName,
    DownloadClientItem,
    MediaInfo,
}

/// A proposed language set from one evidence source. Always non-empty;
/// sources with nothing to say return no signal at all.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSignal {
    pub languages: Vec<Language>,
    pub confidence: LanguageConfidence,
}

/// The closed set of language evidence sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAugmenter {
    History,
    FileName,
    FolderName,
    DownloadClientItem,
    MediaInfo,
}

impl LanguageAugmenter {
    pub const ALL: [LanguageAugmenter; 5] = [
        LanguageAugmenter::History,
        LanguageAugmenter::FileName,
        LanguageAugmenter::FolderName,
        LanguageAugmenter::DownloadClientItem,
        LanguageAugmenter::MediaInfo,
    ];

    /// Priority rank, ascending. History is weakest: a stale grab record
    /// must never override evidence from the file actually on disk.
    pub fn order(self) -> u8 {
        match self {
            LanguageAugmenter::History => 0,
            LanguageAugmenter::FileName => 1,
            LanguageAugmenter::FolderName => 2,
            LanguageAugmenter::DownloadClientItem => 3,
            LanguageAugmenter::MediaInfo => 4,
        }
    }

    /// Inspect the evidence source. Malformed or absent evidence yields
    /// `None`; augmenters never fail.
    pub fn attempt(self, evidence: &Evidence, game: &GameContext) -> Option<LanguageSignal> {
        match self {
            LanguageAugmenter::History => history::languages(evidence, game),
            LanguageAugmenter::FileName => file_name::languages(evidence, game),
            LanguageAugmenter::FolderName => folder_name::languages(evidence, game),
            LanguageAugmenter::DownloadClientItem => download_client::languages(evidence),
            LanguageAugmenter::MediaInfo => media_info::languages(evidence),
        }
    }
}

/// Ranking tag for competing quality proposals. The grabbed release name is
/// usually richer than a renamed on-disk file, so history ranks highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityConfidence {
    FileName,
    FolderName,
    History,
}

/// A proposed quality from one evidence source.
#[derive(Debug, Clone, PartialEq)]
pub struct QualitySignal {
    pub quality: Quality,
    pub revision: Revision,
    pub confidence: QualityConfidence,
}

/// The closed set of quality evidence sources. Media info and the download
/// client do not report quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityAugmenter {
    FileName,
    FolderName,
    History,
}

impl QualityAugmenter {
    pub const ALL: [QualityAugmenter; 3] = [
        QualityAugmenter::FileName,
        QualityAugmenter::FolderName,
        QualityAugmenter::History,
    ];

    pub fn attempt(self, evidence: &Evidence) -> Option<QualitySignal> {
        match self {
            QualityAugmenter::FileName => file_name::quality(evidence),
            QualityAugmenter::FolderName => folder_name::quality(evidence),
            QualityAugmenter::History => history::quality(evidence),
        }
    }
}

/// Shared helper for title-derived language parsing: languages whose token
/// also appears in the game's catalog title are part of the title, not a
/// release tag, and are subtracted from the candidate set.
pub(crate) fn parse_languages_excluding_title(text: &str, game: &GameContext) -> Vec<Language> {
    use crate::engine::parsing::language::parse_languages;

    let mut languages = parse_languages(text);
    if languages.is_empty() {
        return languages;
    }
    let title_languages = parse_languages(&game.title);
    languages.retain(|language| !title_languages.contains(language));
    languages
}

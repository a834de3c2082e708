//! Attribute resolver: turns augmenter signals into one trusted bundle.

pub mod fallback;
pub mod language;
pub mod subtitle;

use crate::engine::augment::QualityAugmenter;
use crate::types::attributes::CandidateAttributes;
use crate::types::evidence::{Evidence, GameContext};
use crate::types::quality::{Quality, Revision};

/// Build the resolved attribute bundle for one candidate. Pure and total:
/// absent evidence resolves every attribute to its documented default.
pub fn resolve_attributes(evidence: &Evidence, game: &GameContext) -> CandidateAttributes {
    let (quality, revision) = resolve_quality(evidence);

    CandidateAttributes {
        languages: language::resolve_languages(evidence, game),
        quality,
        revision,
        edition: fallback::resolve_edition(evidence),
        release_group: fallback::resolve_release_group(evidence),
        subtitle: subtitle::resolve_subtitle(evidence),
        release_title: evidence.title_for_matching().to_string(),
        size_bytes: evidence.size_bytes,
        indexer_flags: evidence.indexer_flags.clone(),
        matched_formats: Vec::new(),
        format_score: 0,
    }
}

/// Strongest non-empty quality signal wins; no signal at all resolves to
/// the unknown quality with a default revision.
fn resolve_quality(evidence: &Evidence) -> (Quality, Revision) {
    QualityAugmenter::ALL
        .iter()
        .filter_map(|augmenter| augmenter.attempt(evidence))
        .max_by_key(|signal| signal.confidence)
        .map(|signal| (signal.quality, signal.revision))
        .unwrap_or_default()
}

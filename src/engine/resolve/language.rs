//! Confidence-ranked language fusion.
//!
//! The strongest non-empty augmenter signal seeds the set; indexer
//! multi-language handling, original-language fallback, and `Original`
//! sentinel expansion are then applied in that fixed order. The resolved
//! set is non-empty, ordered, deduplicated, and never contains `Original`.

use crate::engine::augment::{LanguageAugmenter, LanguageSignal};
use crate::engine::parsing::language::has_multi_indicator;
use crate::types::evidence::{Evidence, GameContext};
use crate::types::language::Language;

pub fn resolve_languages(evidence: &Evidence, game: &GameContext) -> Vec<Language> {
    let seed = strongest_signal(evidence, game)
        .map(|signal| signal.languages)
        .unwrap_or_default();

    let mut languages = apply_indexer_multi(seed, evidence);

    // Fall back to the game's declared original language
    if is_effectively_empty(&languages) && game.original_language != Language::Unknown {
        languages = vec![game.original_language];
    }

    languages = expand_original_sentinel(languages, game);
    dedupe_in_order(&mut languages);

    if languages.is_empty() {
        languages.push(Language::Unknown);
    }
    languages
}

fn strongest_signal(evidence: &Evidence, game: &GameContext) -> Option<LanguageSignal> {
    LanguageAugmenter::ALL
        .iter()
        .filter_map(|augmenter| augmenter.attempt(evidence, game))
        .max_by_key(|signal| signal.confidence)
}

/// Indexer multi-language handling: a `MULTI` indication in the release
/// title pulls in the indexer's configured set. An empty or Unknown-only
/// seed is replaced; anything else is unioned.
fn apply_indexer_multi(seed: Vec<Language>, evidence: &Evidence) -> Vec<Language> {
    let Some(indexer) = &evidence.indexer else {
        return seed;
    };
    if indexer.multi_languages.is_empty() || !has_multi_indicator(evidence.title_for_matching()) {
        return seed;
    }

    if is_effectively_empty(&seed) {
        return indexer.multi_languages.clone();
    }

    let mut languages = seed;
    for language in &indexer.multi_languages {
        if !languages.contains(language) {
            languages.push(*language);
        }
    }
    languages
}

/// `Original` is a placeholder, never a final value: substitute the game's
/// actual original language. When that language is already present, add
/// `Unknown` instead — an explicit but indeterminate second language.
fn expand_original_sentinel(languages: Vec<Language>, game: &GameContext) -> Vec<Language> {
    if !languages.contains(&Language::Original) {
        return languages;
    }

    let mut expanded: Vec<Language> = languages
        .iter()
        .copied()
        .filter(|language| *language != Language::Original)
        .collect();

    let substitute = if expanded.contains(&game.original_language) {
        Language::Unknown
    } else {
        game.original_language
    };
    if !expanded.contains(&substitute) {
        expanded.push(substitute);
    }
    expanded
}

fn is_effectively_empty(languages: &[Language]) -> bool {
    languages
        .iter()
        .all(|language| *language == Language::Unknown)
}

fn dedupe_in_order(languages: &mut Vec<Language>) {
    let mut seen = Vec::with_capacity(languages.len());
    languages.retain(|language| {
        if seen.contains(language) {
            false
        } else {
            seen.push(*language);
            true
        }
    });
}

#[cfg(test)]
#[path = "tests/language_tests.rs"]
mod tests;

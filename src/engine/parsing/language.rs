//! Language-token extraction from release names.

use crate::engine::normalizer;
use crate::types::language::Language;

/// Release-name tokens that indicate a language. Ambiguous two-letter
/// tokens (`en`, `fr`, `it`, ...) are deliberately absent: they collide
/// with ordinary title words far too often.
const LANGUAGE_TOKENS: &[(&str, Language)] = &[
    ("english", Language::English),
    ("eng", Language::English),
    ("french", Language::French),
    ("truefrench", Language::French),
    ("fre", Language::French),
    ("fra", Language::French),
    ("vf", Language::French),
    ("vff", Language::French),
    ("vfq", Language::French),
    ("vostfr", Language::French),
    ("german", Language::German),
    ("ger", Language::German),
    ("deu", Language::German),
    ("spanish", Language::Spanish),
    ("spa", Language::Spanish),
    ("castellano", Language::Spanish),
    ("italian", Language::Italian),
    ("ita", Language::Italian),
    ("portuguese", Language::Portuguese),
    ("brazilian", Language::Portuguese),
    ("ptbr", Language::Portuguese),
    ("russian", Language::Russian),
    ("rus", Language::Russian),
    ("polish", Language::Polish),
    ("pol", Language::Polish),
    ("dutch", Language::Dutch),
    ("flemish", Language::Dutch),
    ("japanese", Language::Japanese),
    ("jpn", Language::Japanese),
    ("jap", Language::Japanese),
    ("korean", Language::Korean),
    ("kor", Language::Korean),
    ("chinese", Language::Chinese),
    ("mandarin", Language::Chinese),
    ("chs", Language::Chinese),
    ("cht", Language::Chinese),
    ("czech", Language::Czech),
    ("cze", Language::Czech),
    ("swedish", Language::Swedish),
    ("swe", Language::Swedish),
    ("danish", Language::Danish),
    ("dan", Language::Danish),
    ("norwegian", Language::Norwegian),
    ("nordic", Language::Norwegian),
    ("finnish", Language::Finnish),
    ("fin", Language::Finnish),
    ("hungarian", Language::Hungarian),
    ("hun", Language::Hungarian),
    ("turkish", Language::Turkish),
    ("tur", Language::Turkish),
    ("arabic", Language::Arabic),
    ("ara", Language::Arabic),
];

/// Language indicated by one normalized token, if any.
pub fn language_for_token(token: &str) -> Option<Language> {
    LANGUAGE_TOKENS
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|(_, language)| *language)
}

/// Parse language tokens out of a raw name. Returns an ordered,
/// deduplicated list; empty when nothing matched.
pub fn parse_languages(text: &str) -> Vec<Language> {
    let mut found = Vec::new();
    for token in normalizer::tokenize(text) {
        if let Some(language) = language_for_token(&token) {
            if !found.contains(&language) {
                found.push(language);
            }
        }
    }
    found
}

/// Whether the name carries a multi-language indication (`MULTI`,
/// `MULTi5`, `MULTILANGUAGE`, ...).
pub fn has_multi_indicator(text: &str) -> bool {
    normalizer::tokenize(text).iter().any(|token| {
        token
            .strip_prefix("multi")
            .is_some_and(|rest| rest.is_empty() || rest.chars().all(|c| c.is_ascii_digit()))
            || token == "multilanguage"
            || token == "multilang"
    })
}

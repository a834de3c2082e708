//! Text normalization for release, folder, and subtitle names.
//! Handles transliteration, separator folding, and tokenization.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex folding common release-name separators into spaces.
static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._\-+]+").expect("valid separator regex"));

/// Compiled regex for stripping remaining non-alphanumeric characters.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid symbol regex"));

/// Compiled regex collapsing runs of whitespace.
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize a release or folder name into lowercase space-separated text.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters via deunicode
/// 2. Fold `.`/`_`/`-`/`+` separators into spaces
/// 3. Strip remaining symbols (brackets, parens) keeping their contents
/// 4. Lowercase and collapse whitespace
pub fn normalize_title(text: &str) -> String {
    let latin = deunicode(text);
    let separated = RE_SEPARATORS.replace_all(&latin, " ");
    let clean = RE_NON_ALNUM.replace_all(&separated, " ");
    RE_WHITESPACE
        .replace_all(clean.to_lowercase().trim(), " ")
        .to_string()
}

/// Ordered token list of a normalized name. Order is preserved so resolved
/// language sets stay deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize_title(text)
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}

/// Case/separator-insensitive substring test between two raw names.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    let needle = normalize_title(needle);
    if needle.is_empty() {
        return false;
    }
    normalize_title(haystack).contains(&needle)
}

/// Strip a trailing file extension (up to 4 alphanumeric characters).
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && (1..=4).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => name,
    }
}

//! Edition and release-group extraction from release and folder names.

use regex::Regex;
use std::sync::LazyLock;

use crate::engine::normalizer;

/// Compiled regex for edition markers in normalized text.
static RE_EDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(goty|game of the year|deluxe|definitive|directors? cut|remastered|anniversary|collectors?|ultimate|complete|enhanced|gold|legendary)( edition)?\b",
    )
    .expect("valid edition regex")
});

/// Compiled regex for a trailing `-GROUP` marker on a name stem.
static RE_RELEASE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([A-Za-z][A-Za-z0-9]{1,20})$").expect("valid group regex"));

/// Extract an edition marker (`GOTY`, `Deluxe Edition`, ...) from a raw
/// name. Returns the normalized marker text, or `None`.
pub fn parse_edition(text: &str) -> Option<String> {
    let normalized = normalizer::normalize_title(text);
    RE_EDITION
        .find(&normalized)
        .map(|found| found.as_str().to_string())
}

/// Extract a trailing release-group tag from a file or folder name.
/// Bracketed suffixes (checksums, site tags) are stripped first.
pub fn parse_release_group(name: &str) -> Option<String> {
    let stem = normalizer::strip_extension(name.trim());
    let stem = strip_bracket_suffix(stem);
    RE_RELEASE_GROUP
        .captures(stem)
        .map(|captures| captures[1].to_string())
}

fn strip_bracket_suffix(name: &str) -> &str {
    let trimmed = name.trim_end();
    if let Some(open) = trimmed.rfind('[') {
        if trimmed.ends_with(']') {
            return trimmed[..open].trim_end();
        }
    }
    trimmed
}

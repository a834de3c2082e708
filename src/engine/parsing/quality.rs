//! Quality and revision extraction from release names.

use regex::Regex;
use std::sync::LazyLock;

use crate::engine::normalizer;
use crate::types::quality::{Quality, QualitySource, Resolution, Revision};

/// Compiled regex for version counters (`v2`, `v1.04`). The major number is
/// the revision counter; patch digits only disambiguate, they never rank.
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bv(\d{1,4})(?:[._]\d+)*\b").expect("valid version regex"));

// "iso" is deliberately absent: it collides with the .iso file extension
const DISC_TOKENS: &[&str] = &["disc", "bluray", "cdrom", "dvd"];
const DIGITAL_TOKENS: &[&str] = &["gog", "digital", "steamrip", "egs", "drmfree"];
const RIP_TOKENS: &[&str] = &["rip", "gamerip", "webrip"];
const RESOLUTION_TOKENS: &[(&str, Resolution)] = &[
    ("480p", Resolution::R480),
    ("720p", Resolution::R720),
    ("1080p", Resolution::R1080),
    ("2160p", Resolution::R2160),
    ("4k", Resolution::R2160),
];
const REPACK_TOKENS: &[&str] = &["repack", "rerip"];
const REAL_TOKENS: &[&str] = &["proper", "real"];

/// Parse quality source, resolution tier, and revision out of a raw name.
///
/// Returns `None` when the name carries no quality-indicating token at all,
/// so the resolver can fall through to weaker evidence sources. Malformed
/// input is simply token soup that matches nothing.
pub fn parse_quality(text: &str) -> Option<(Quality, Revision)> {
    let tokens = normalizer::tokenize(text);

    let mut source = QualitySource::Unknown;
    let mut resolution = Resolution::Unknown;
    let mut revision = Revision::default();
    let mut any_signal = false;

    for token in &tokens {
        let token = token.as_str();
        // Disc beats Digital beats Rip when a name carries several markers
        if DISC_TOKENS.contains(&token) {
            source = source.max(QualitySource::Disc);
            any_signal = true;
        } else if DIGITAL_TOKENS.contains(&token) {
            source = source.max(QualitySource::Digital);
            any_signal = true;
        } else if RIP_TOKENS.contains(&token) {
            source = source.max(QualitySource::Rip);
            any_signal = true;
        }

        if let Some((_, tier)) = RESOLUTION_TOKENS.iter().find(|(t, _)| *t == token) {
            resolution = resolution.max(*tier);
            any_signal = true;
        }
        if REPACK_TOKENS.contains(&token) {
            revision.is_repack = true;
            any_signal = true;
        }
        if REAL_TOKENS.contains(&token) {
            revision.real = true;
            any_signal = true;
        }
    }

    // Raw text, not normalized: separator folding would split `v1.04`
    if let Some(captures) = RE_VERSION.captures(text) {
        if let Ok(version) = captures[1].parse::<u32>() {
            if version > 1 {
                revision.version = version;
                any_signal = true;
            }
        }
    }

    any_signal.then_some((Quality::new(source, resolution), revision))
}

//! Subtitle metadata resolution against the companion media file.
//!
//! Names like `Space.Frontier.French.srt` carry the media title, not a
//! subtitle-specific one; parsing them in full mode would embed that title
//! in the tag list. When the parsed title matches the media title, the name
//! is re-parsed in basic mode, and any language tag whose token already
//! appears inside the media title is dropped.

use crate::engine::normalizer;
use crate::engine::parsing::subtitle::{parse_subtitle, ParsedSubtitle, SubtitleParseMode};
use crate::types::attributes::SubtitleInfo;
use crate::types::evidence::Evidence;

pub fn resolve_subtitle(evidence: &Evidence) -> Option<SubtitleInfo> {
    let subtitle_name = evidence.subtitle_file_name.as_deref()?;
    let media_title = normalizer::strip_extension(&evidence.file_name);

    let mut parsed = parse_subtitle(subtitle_name, SubtitleParseMode::Full);
    if let Some(title) = &parsed.title {
        if normalizer::contains_normalized(media_title, title) {
            parsed = parse_subtitle(subtitle_name, SubtitleParseMode::Basic);
        }
    }

    Some(build_info(parsed, media_title))
}

fn build_info(parsed: ParsedSubtitle, media_title: &str) -> SubtitleInfo {
    let media_normalized = normalizer::normalize_title(media_title);
    let languages = parsed
        .tags
        .into_iter()
        .filter(|tag| !media_normalized.contains(&tag.token))
        .map(|tag| tag.language)
        .collect();

    SubtitleInfo {
        title: parsed.title,
        languages,
    }
}

//! Embedded media-info evidence: audio track languages (order 4, strongest).

use crate::engine::augment::{LanguageConfidence, LanguageSignal};
use crate::types::evidence::Evidence;
use crate::types::language::Language;

pub fn languages(evidence: &Evidence) -> Option<LanguageSignal> {
    let info = evidence.media_info.as_ref()?;

    let mut languages = Vec::new();
    for code in &info.audio_language_codes {
        // Unrecognized codes are skipped; malformed metadata is not an error
        if let Some(language) = Language::from_audio_code(code) {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
    }

    (!languages.is_empty()).then_some(LanguageSignal {
        languages,
        confidence: LanguageConfidence::MediaInfo,
    })
}

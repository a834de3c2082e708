//! File-name evidence: the weakest on-disk signal (order 1).

use crate::engine::augment::{
    parse_languages_excluding_title, LanguageConfidence, LanguageSignal, QualityConfidence,
    QualitySignal,
};
use crate::engine::parsing::quality::parse_quality;
use crate::types::evidence::{Evidence, GameContext};

/// Language proposal from the release/file name. The release's own declared
/// language list wins verbatim when present; otherwise tokens are parsed
/// out of the normalized title text.
pub fn languages(evidence: &Evidence, game: &GameContext) -> Option<LanguageSignal> {
    let languages = if evidence.declared_languages.is_empty() {
        parse_languages_excluding_title(evidence.title_for_matching(), game)
    } else {
        evidence.declared_languages.clone()
    };

    (!languages.is_empty()).then_some(LanguageSignal {
        languages,
        confidence: LanguageConfidence::FileName,
    })
}

pub fn quality(evidence: &Evidence) -> Option<QualitySignal> {
    let (quality, revision) = parse_quality(evidence.title_for_matching())?;
    Some(QualitySignal {
        quality,
        revision,
        confidence: QualityConfidence::FileName,
    })
}

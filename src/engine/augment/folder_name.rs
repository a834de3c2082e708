//! Folder-name evidence (order 2).

use crate::engine::augment::{
    parse_languages_excluding_title, LanguageConfidence, LanguageSignal, QualityConfidence,
    QualitySignal,
};
use crate::engine::parsing::quality::parse_quality;
use crate::types::evidence::{Evidence, GameContext};

pub fn languages(evidence: &Evidence, game: &GameContext) -> Option<LanguageSignal> {
    let languages = parse_languages_excluding_title(&evidence.folder_name, game);
    (!languages.is_empty()).then_some(LanguageSignal {
        languages,
        confidence: LanguageConfidence::FolderName,
    })
}

pub fn quality(evidence: &Evidence) -> Option<QualitySignal> {
    let (quality, revision) = parse_quality(&evidence.folder_name)?;
    Some(QualitySignal {
        quality,
        revision,
        confidence: QualityConfidence::FolderName,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::language::Language;
    use crate::types::quality::QualitySource;

    #[test]
    fn test_folder_language_tokens() {
        let evidence = Evidence {
            folder_name: "Game.Name.FRENCH.GOG".into(),
            ..Evidence::default()
        };
        let signal = languages(&evidence, &GameContext::default()).unwrap();
        assert_eq!(signal.languages, vec![Language::French]);
        assert_eq!(signal.confidence, LanguageConfidence::FolderName);

        let quality_signal = quality(&evidence).unwrap();
        assert_eq!(quality_signal.quality.source, QualitySource::Digital);
    }
}

//! Grab-history evidence: re-parses the originally grabbed release title.

use crate::engine::augment::{
    parse_languages_excluding_title, LanguageConfidence, LanguageSignal, QualityConfidence,
    QualitySignal,
};
use crate::engine::parsing::quality::parse_quality;
use crate::types::evidence::{Evidence, GameContext};

pub fn languages(evidence: &Evidence, game: &GameContext) -> Option<LanguageSignal> {
    let record = evidence.history.as_ref()?;
    let languages = parse_languages_excluding_title(&record.source_title, game);
    (!languages.is_empty()).then_some(LanguageSignal {
        languages,
        confidence: LanguageConfidence::History,
    })
}

pub fn quality(evidence: &Evidence) -> Option<QualitySignal> {
    let record = evidence.history.as_ref()?;
    let (quality, revision) = parse_quality(&record.source_title)?;
    Some(QualitySignal {
        quality,
        revision,
        confidence: QualityConfidence::History,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::evidence::GrabHistory;
    use crate::types::language::Language;
    use crate::types::quality::Resolution;

    #[test]
    fn test_source_title_reparsed() {
        let evidence = Evidence {
            history: Some(GrabHistory {
                source_title: "Game.Name.POLISH.1080p.REPACK-GRP".into(),
            }),
            ..Evidence::default()
        };
        let language_signal = languages(&evidence, &GameContext::default()).unwrap();
        assert_eq!(language_signal.languages, vec![Language::Polish]);
        assert_eq!(language_signal.confidence, LanguageConfidence::History);

        let quality_signal = quality(&evidence).unwrap();
        assert_eq!(quality_signal.quality.resolution, Resolution::R1080);
        assert!(quality_signal.revision.is_repack);
    }

    #[test]
    fn test_absent_history_is_no_signal() {
        let evidence = Evidence::default();
        assert_eq!(languages(&evidence, &GameContext::default()), None);
        assert_eq!(quality(&evidence), None);
    }
}

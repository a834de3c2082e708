//! Per-specification predicates.
//!
//! Every predicate is total over (candidate, parameters). Unknown kinds and
//! invalid user regexes fail closed: one malformed rule must never block
//! decisions for the whole library.

use regex::RegexBuilder;

use crate::types::attributes::CandidateAttributes;
use crate::types::format::{Specification, SpecificationMatcher};

/// Evaluate one specification: raw predicate XOR the negate flag.
pub fn evaluate(spec: &Specification, attributes: &CandidateAttributes) -> bool {
    spec.negate ^ raw_predicate(spec, attributes)
}

fn raw_predicate(spec: &Specification, attributes: &CandidateAttributes) -> bool {
    match &spec.matcher {
        SpecificationMatcher::ReleaseTitle { pattern } => {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(regex) => regex.is_match(&attributes.release_title),
                Err(error) => {
                    log::warn!(
                        "Invalid pattern in specification '{}' — treated as non-matching: {error}",
                        spec.name
                    );
                    false
                }
            }
        }
        SpecificationMatcher::Size {
            min_bytes,
            max_bytes,
        } => attributes.size_bytes > *min_bytes && attributes.size_bytes <= *max_bytes,
        SpecificationMatcher::Language { languages } => languages
            .iter()
            .any(|language| attributes.languages.contains(language)),
        SpecificationMatcher::Source { source } => attributes.quality.source == *source,
        SpecificationMatcher::Resolution { resolution } => {
            attributes.quality.resolution == *resolution
        }
        SpecificationMatcher::IndexerFlag { flag } => attributes.indexer_flags.contains(flag),
        SpecificationMatcher::Unknown => {
            log::warn!(
                "Unknown specification kind in '{}' — treated as non-matching",
                spec.name
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::format::IndexerFlag;
    use crate::types::language::Language;
    use crate::types::quality::{Quality, QualitySource, Resolution};

    fn spec(matcher: SpecificationMatcher) -> Specification {
        Specification {
            name: "test".into(),
            negate: false,
            required: false,
            matcher,
        }
    }

    fn attributes() -> CandidateAttributes {
        CandidateAttributes {
            languages: vec![Language::English, Language::French],
            quality: Quality::new(QualitySource::Digital, Resolution::R1080),
            release_title: "Space.Frontier.v2.REPACK-GRP".into(),
            size_bytes: 5_000,
            indexer_flags: vec![IndexerFlag::Freeleech],
            ..CandidateAttributes::default()
        }
    }

    #[test]
    fn test_release_title_pattern_case_insensitive() {
        assert!(evaluate(
            &spec(SpecificationMatcher::ReleaseTitle {
                pattern: r"\brepack\b".into()
            }),
            &attributes()
        ));
    }

    #[test]
    fn test_invalid_pattern_fails_closed() {
        assert!(!evaluate(
            &spec(SpecificationMatcher::ReleaseTitle {
                pattern: "(unclosed".into()
            }),
            &attributes()
        ));
    }

    #[test]
    fn test_size_window_is_half_open() {
        let matcher = SpecificationMatcher::Size {
            min_bytes: 5_000,
            max_bytes: 10_000,
        };
        assert!(!evaluate(&spec(matcher.clone()), &attributes())); // at min: excluded
        let mut at_max = attributes();
        at_max.size_bytes = 10_000;
        assert!(evaluate(&spec(matcher), &at_max)); // at max: included
    }

    #[test]
    fn test_language_membership_is_intersection() {
        assert!(evaluate(
            &spec(SpecificationMatcher::Language {
                languages: vec![Language::French, Language::Korean]
            }),
            &attributes()
        ));
        assert!(!evaluate(
            &spec(SpecificationMatcher::Language {
                languages: vec![Language::Korean]
            }),
            &attributes()
        ));
    }

    #[test]
    fn test_source_resolution_and_flag() {
        assert!(evaluate(
            &spec(SpecificationMatcher::Source {
                source: QualitySource::Digital
            }),
            &attributes()
        ));
        assert!(evaluate(
            &spec(SpecificationMatcher::Resolution {
                resolution: Resolution::R1080
            }),
            &attributes()
        ));
        assert!(evaluate(
            &spec(SpecificationMatcher::IndexerFlag {
                flag: IndexerFlag::Freeleech
            }),
            &attributes()
        ));
        assert!(!evaluate(
            &spec(SpecificationMatcher::IndexerFlag {
                flag: IndexerFlag::Internal
            }),
            &attributes()
        ));
    }

    #[test]
    fn test_negate_xors_result() {
        let mut negated = spec(SpecificationMatcher::Source {
            source: QualitySource::Digital,
        });
        negated.negate = true;
        assert!(!evaluate(&negated, &attributes()));

        let mut negated_miss = spec(SpecificationMatcher::Source {
            source: QualitySource::Disc,
        });
        negated_miss.negate = true;
        assert!(evaluate(&negated_miss, &attributes()));
    }

    #[test]
    fn test_unknown_kind_fails_closed_even_negated() {
        // negate applies after the raw predicate, so an unknown kind with
        // negate=true evaluates true — the fail-closed contract is on the
        // raw predicate, not on the final XOR
        assert!(!evaluate(&spec(SpecificationMatcher::Unknown), &attributes()));
        let mut negated = spec(SpecificationMatcher::Unknown);
        negated.negate = true;
        assert!(evaluate(&negated, &attributes()));
    }
}

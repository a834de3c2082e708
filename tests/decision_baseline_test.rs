//! End-to-end decision pipeline test suite.
//!
//! Runs the full resolve → evaluate → score → decide pipeline over a small
//! fixture corpus of release names against one realistic profile.

use gamarr_engine::types::evidence::{GrabHistory, MediaInfo};
use gamarr_engine::types::format::{IndexerFlag, Specification, SpecificationMatcher};
use gamarr_engine::types::profile::{FormatItem, QualityProfileItem};
use gamarr_engine::types::quality::{Quality, QualitySource, Resolution, Revision};
use gamarr_engine::{
    evaluate_release, CustomFormat, Evidence, ExistingFileSnapshot, GameContext, Language,
    QualityProfile,
};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

// ─── Fixtures ─────────────────────────────────────────────────────

fn fixture_formats() -> Vec<CustomFormat> {
    vec![
        CustomFormat {
            id: 1,
            name: "Repack".to_string(),
            specifications: vec![Specification {
                name: "repack marker".to_string(),
                negate: false,
                required: true,
                matcher: SpecificationMatcher::ReleaseTitle {
                    pattern: r"\brepack\b".to_string(),
                },
            }],
        },
        CustomFormat {
            id: 2,
            name: "French Audio".to_string(),
            specifications: vec![Specification {
                name: "french present".to_string(),
                negate: false,
                required: false,
                matcher: SpecificationMatcher::Language {
                    languages: vec![Language::French],
                },
            }],
        },
        CustomFormat {
            id: 3,
            name: "Nuked".to_string(),
            specifications: vec![Specification {
                name: "nuked flag".to_string(),
                negate: false,
                required: false,
                matcher: SpecificationMatcher::IndexerFlag {
                    flag: IndexerFlag::Nuked,
                },
            }],
        },
    ]
}

fn fixture_profile() -> QualityProfile {
    QualityProfile {
        name: "standard".to_string(),
        items: vec![
            QualityProfileItem {
                quality: Quality::new(QualitySource::Rip, Resolution::Unknown),
                allowed: true,
            },
            QualityProfileItem {
                quality: Quality::new(QualitySource::Digital, Resolution::Unknown),
                allowed: true,
            },
            QualityProfileItem {
                quality: Quality::new(QualitySource::Disc, Resolution::Unknown),
                allowed: true,
            },
        ],
        cutoff: Quality::new(QualitySource::Digital, Resolution::Unknown),
        format_items: vec![
            FormatItem {
                format_id: 1,
                score: 25,
            },
            FormatItem {
                format_id: 2,
                score: 10,
            },
            FormatItem {
                format_id: 3,
                score: -100,
            },
        ],
        min_format_score: 0,
        cutoff_format_score: 25,
        min_upgrade_format_score: 10,
    }
}

fn game() -> GameContext {
    GameContext {
        title: "Space Frontier".to_string(),
        original_language: Language::English,
        catalog_id: 7,
    }
}

// ─── Cases ────────────────────────────────────────────────────────

#[test]
fn test_first_acquisition_accepts_matching_release() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.FRENCH.GOG.REPACK-GRP.iso".to_string(),
        ..Evidence::default()
    };
    let decision = evaluate_release(&evidence, &game(), &fixture_profile(), &fixture_formats(), None);
    assert!(decision.accepted);
    assert!(!decision.is_upgrade);
}

#[test]
fn test_penalized_release_rejected_below_minimum() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.GOG-GRP.iso".to_string(),
        indexer_flags: vec![IndexerFlag::Nuked],
        ..Evidence::default()
    };
    let decision = evaluate_release(&evidence, &game(), &fixture_profile(), &fixture_formats(), None);
    assert!(!decision.accepted);
    assert_eq!(decision.rejections[0].code(), "below-min-format-score");
}

#[test]
fn test_quality_upgrade_over_existing_file() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.GOG-GRP.iso".to_string(),
        ..Evidence::default()
    };
    let existing = ExistingFileSnapshot {
        quality: Quality::new(QualitySource::Rip, Resolution::Unknown),
        revision: Revision::default(),
        format_score: 0,
    };
    let decision = evaluate_release(
        &evidence,
        &game(),
        &fixture_profile(),
        &fixture_formats(),
        Some(&existing),
    );
    assert!(decision.accepted);
    assert!(decision.is_upgrade);
    assert!(decision.cutoff_not_met);
}

#[test]
fn test_equal_quality_needs_format_delta() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.FRENCH.GOG-GRP.iso".to_string(),
        ..Evidence::default()
    };
    let existing = ExistingFileSnapshot {
        quality: Quality::new(QualitySource::Digital, Resolution::Unknown),
        revision: Revision::default(),
        format_score: 5,
    };
    // candidate scores 10 (French Audio); delta 5 < min_upgrade 10
    let decision = evaluate_release(
        &evidence,
        &game(),
        &fixture_profile(),
        &fixture_formats(),
        Some(&existing),
    );
    assert!(!decision.accepted);
    assert_eq!(decision.rejections[0].code(), "insufficient-format-upgrade");
}

#[test]
fn test_repack_upgrade_at_equal_quality() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.FRENCH.GOG.REPACK-GRP.iso".to_string(),
        ..Evidence::default()
    };
    let existing = ExistingFileSnapshot {
        quality: Quality::new(QualitySource::Digital, Resolution::Unknown),
        revision: Revision::default(),
        format_score: 0,
    };
    // same tier, repack revision and score delta 35 both favor the candidate
    let decision = evaluate_release(
        &evidence,
        &game(),
        &fixture_profile(),
        &fixture_formats(),
        Some(&existing),
    );
    assert!(decision.accepted);
    assert!(decision.is_upgrade);
}

#[test]
fn test_media_info_language_feeds_format_scoring() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.GOG-GRP.iso".to_string(),
        media_info: Some(MediaInfo {
            audio_language_codes: vec!["fra".to_string()],
        }),
        ..Evidence::default()
    };
    let existing = ExistingFileSnapshot {
        quality: Quality::new(QualitySource::Digital, Resolution::Unknown),
        revision: Revision::default(),
        format_score: 0,
    };
    // French Audio format (+10) matched via embedded audio track
    let decision = evaluate_release(
        &evidence,
        &game(),
        &fixture_profile(),
        &fixture_formats(),
        Some(&existing),
    );
    assert!(decision.accepted);
    assert!(decision.is_upgrade);
}

#[test]
fn test_history_rescues_renamed_local_import() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space Frontier (installed).bin".to_string(),
        history: Some(GrabHistory {
            source_title: "Space.Frontier.GOG.REPACK-GRP".to_string(),
        }),
        ..Evidence::default()
    };
    let decision = evaluate_release(&evidence, &game(), &fixture_profile(), &fixture_formats(), None);
    assert!(decision.accepted);
}

#[test]
fn test_unknown_format_reference_rejects_with_configuration_reason() {
    init_logging();
    let mut profile = fixture_profile();
    profile.format_items.push(FormatItem {
        format_id: 99,
        score: 5,
    });
    let evidence = Evidence {
        file_name: "Space.Frontier.GOG-GRP.iso".to_string(),
        ..Evidence::default()
    };
    let decision = evaluate_release(&evidence, &game(), &profile, &fixture_formats(), None);
    assert!(!decision.accepted);
    assert_eq!(
        decision.rejections[0].code(),
        "invalid-profile-configuration"
    );
}

#[test]
fn test_decisions_are_deterministic() {
    init_logging();
    let evidence = Evidence {
        file_name: "Space.Frontier.FRENCH.GOG.REPACK-GRP.iso".to_string(),
        ..Evidence::default()
    };
    let existing = ExistingFileSnapshot {
        quality: Quality::new(QualitySource::Rip, Resolution::Unknown),
        revision: Revision::default(),
        format_score: 3,
    };
    let run = || {
        evaluate_release(
            &evidence,
            &game(),
            &fixture_profile(),
            &fixture_formats(),
            Some(&existing),
        )
    };
    assert_eq!(run(), run());
}

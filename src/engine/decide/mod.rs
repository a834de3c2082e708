//! Upgrade/cutoff decision: the terminal accept/reject state machine.

pub mod score;

pub use score::compute_score;

use std::cmp::Ordering;

use crate::types::attributes::CandidateAttributes;
use crate::types::decision::{Decision, ExistingFileSnapshot, Rejection};
use crate::types::profile::QualityProfile;
use crate::types::quality::{Quality, Revision};

#[cfg(feature = "debug_decisions")]
use log::debug;

/// Decide whether a candidate is accepted, and whether it upgrades an
/// existing file. Ordered gates, terminal on the first reject:
/// min-format-score, quality allowed, then the existing-file comparison.
/// `cutoff_not_met` is reporting-only and computed independently.
pub fn decide(
    profile: &QualityProfile,
    attributes: &CandidateAttributes,
    existing: Option<&ExistingFileSnapshot>,
) -> Decision {
    let cutoff_not_met = existing
        .map(|file| is_cutoff_not_met(profile, file))
        .unwrap_or(false);

    // A broken profile makes every decision unreliable; surface it instead
    // of silently ignoring the misconfiguration
    if let Err(error) = profile.validate() {
        return Decision::rejected(
            vec![Rejection::InvalidProfileConfiguration {
                detail: error.to_string(),
            }],
            cutoff_not_met,
        );
    }

    if attributes.format_score < profile.min_format_score {
        return Decision::rejected(
            vec![Rejection::BelowMinFormatScore {
                score: attributes.format_score,
                min_score: profile.min_format_score,
            }],
            cutoff_not_met,
        );
    }

    if !profile.is_allowed(&attributes.quality) {
        return Decision::rejected(vec![Rejection::QualityNotAllowed], cutoff_not_met);
    }

    let Some(file) = existing else {
        return Decision::accepted_new(false);
    };

    match compare_quality(
        profile,
        (&attributes.quality, &attributes.revision),
        (&file.quality, &file.revision),
    ) {
        Ordering::Greater => Decision::accepted_upgrade(cutoff_not_met),
        Ordering::Less => Decision::rejected(vec![Rejection::QualityDowngrade], cutoff_not_met),
        Ordering::Equal => {
            let delta = attributes.format_score - file.format_score;

            #[cfg(feature = "debug_decisions")]
            debug!(
                "[DECIDE] equal quality, format delta={delta} required={}",
                profile.min_upgrade_format_score
            );

            if delta >= profile.min_upgrade_format_score {
                Decision::accepted_upgrade(cutoff_not_met)
            } else {
                Decision::rejected(
                    vec![Rejection::InsufficientFormatUpgrade {
                        delta,
                        required: profile.min_upgrade_format_score,
                    }],
                    cutoff_not_met,
                )
            }
        }
    }
}

/// Profile-ordered quality comparison: ladder weight first, revision as the
/// tie-break. A quality missing from the ladder ranks below every listed
/// one, so replacing a file whose quality was removed from the profile
/// still counts as an upgrade.
fn compare_quality(
    profile: &QualityProfile,
    candidate: (&Quality, &Revision),
    existing: (&Quality, &Revision),
) -> Ordering {
    let candidate_weight = profile.weight_of(candidate.0);
    let existing_weight = profile.weight_of(existing.0);

    match (candidate_weight, existing_weight) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| candidate.1.cmp(existing.1)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => candidate.1.cmp(existing.1),
    }
}

/// Existing file is still short of the profile's quality cutoff or format
/// score cutoff. Drives upgrade searches, never the accept/reject branch.
fn is_cutoff_not_met(profile: &QualityProfile, file: &ExistingFileSnapshot) -> bool {
    let quality_below_cutoff = match (
        profile.weight_of(&file.quality),
        profile.weight_of(&profile.cutoff),
    ) {
        (Some(file_weight), Some(cutoff_weight)) => file_weight < cutoff_weight,
        // unlisted file quality is below any listed cutoff
        (None, Some(_)) => true,
        _ => false,
    };

    quality_below_cutoff || file.format_score < profile.cutoff_format_score
}

#[cfg(test)]
#[path = "tests/decide_tests.rs"]
mod decide_tests;

//! The decision engine: resolve → evaluate → score → decide.
//!
//! Every entry point is a synchronous pure function over immutable inputs;
//! callers may evaluate any number of candidates concurrently with no
//! coordination. Evidence must be fully materialized before a call.

pub mod augment;
pub mod decide;
pub mod formats;
pub mod normalizer;
pub mod parsing;
pub mod resolve;

// Public engine surface
pub use decide::{compute_score, decide};
pub use formats::evaluate_formats;
pub use resolve::resolve_attributes;

use crate::types::attributes::CandidateAttributes;
use crate::types::decision::{Decision, ExistingFileSnapshot, Rejection};
use crate::types::evidence::{Evidence, GameContext};
use crate::types::format::CustomFormat;
use crate::types::profile::QualityProfile;

/// Run the full pipeline for one candidate release.
///
/// Builds the attribute bundle once, evaluates the supplied format
/// definitions, scores them against the profile, and produces the terminal
/// decision. Profile format references are cross-checked here because this
/// is the only place both the profile and the definitions are in hand.
pub fn evaluate_release(
    evidence: &Evidence,
    game: &GameContext,
    profile: &QualityProfile,
    formats: &[CustomFormat],
    existing: Option<&ExistingFileSnapshot>,
) -> Decision {
    if let Err(error) = profile.validate_format_refs(formats) {
        log::warn!("Rejecting candidate for game {}: {error}", game.catalog_id);
        return Decision::rejected(
            vec![Rejection::InvalidProfileConfiguration {
                detail: error.to_string(),
            }],
            false,
        );
    }

    let attributes = build_attributes(evidence, game, profile, formats);
    decide(profile, &attributes, existing)
}

/// Resolve and attach format results in one pass, yielding the final
/// immutable attribute bundle.
pub fn build_attributes(
    evidence: &Evidence,
    game: &GameContext,
    profile: &QualityProfile,
    formats: &[CustomFormat],
) -> CandidateAttributes {
    let attributes = resolve_attributes(evidence, game);
    let matched = evaluate_formats(&attributes, formats);
    let score = compute_score(profile, &matched);
    attributes.with_formats(matched, score)
}

//! Format score aggregation.

use crate::types::attributes::MatchedFormat;
use crate::types::profile::QualityProfile;

/// Sum of profile scores for every matched format. Additive and
/// order-independent; negative scores sum without clamping. Matched formats
/// absent from the profile's table contribute zero.
pub fn compute_score(profile: &QualityProfile, matched: &[MatchedFormat]) -> i32 {
    matched
        .iter()
        .map(|format| profile.score_for(format.format_id))
        .sum()
}

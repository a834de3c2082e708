//! Custom-format evaluation: AND-semantics with required short-circuiting.

pub mod specifications;

use crate::types::attributes::{CandidateAttributes, MatchedFormat};
use crate::types::format::CustomFormat;

#[cfg(feature = "debug_decisions")]
use log::debug;

/// Whether one format matches a candidate.
///
/// Every specification must pass after negation. A failing `required`
/// specification stops evaluation immediately (cheap rejection); a failing
/// non-required one marks the format unmatched but evaluation continues so
/// diagnostics can report every failing rule. A format with zero
/// specifications matches unconditionally.
pub fn format_matches(format: &CustomFormat, attributes: &CandidateAttributes) -> bool {
    let mut matches = true;

    for spec in &format.specifications {
        let result = specifications::evaluate(spec, attributes);

        #[cfg(feature = "debug_decisions")]
        debug!(
            "[FORMAT_EVAL] format='{}' spec='{}' required={} negate={} result={}",
            format.name, spec.name, spec.required, spec.negate, result
        );

        if spec.required && !result {
            return false;
        }
        if !result {
            matches = false;
        }
    }

    matches
}

/// Evaluate every format definition against one candidate, in declared
/// order. Formats not referenced by the profile still evaluate here; they
/// simply score zero later.
pub fn evaluate_formats(
    attributes: &CandidateAttributes,
    formats: &[CustomFormat],
) -> Vec<MatchedFormat> {
    formats
        .iter()
        .filter(|format| format_matches(format, attributes))
        .map(|format| MatchedFormat {
            format_id: format.id,
            name: format.name.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/evaluator_tests.rs"]
mod evaluator_tests;

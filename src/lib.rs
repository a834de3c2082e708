//! Gamarr decision engine.
//!
//! Merges conflicting evidence about a candidate release (file name, folder
//! name, download-client report, embedded media info, grab history) into one
//! trusted attribute set, evaluates custom-format rules against it, and
//! decides whether the release is accepted, rejected, or an upgrade over an
//! existing file.
//!
//! The engine is purely functional: no I/O, no shared mutable state. All
//! reference data (profiles, format definitions) is supplied per call by
//! external collaborators.

pub mod engine;
pub mod types;

pub use engine::{
    build_attributes, compute_score, decide, evaluate_formats, evaluate_release,
    resolve_attributes,
};
pub use types::{
    CandidateAttributes, CustomFormat, Decision, Evidence, ExistingFileSnapshot, GameContext,
    Language, MatchedFormat, Quality, QualityProfile, Rejection, Specification,
};

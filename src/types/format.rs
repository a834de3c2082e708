//! Custom format and specification definitions.
//!
//! A `CustomFormat` matches a candidate iff every contained `Specification`
//! passes after negation (AND-semantics). Definitions arrive from the
//! caller's config store as JSON; an unrecognized specification kind
//! deserializes into `SpecificationMatcher::Unknown` and fails closed at
//! evaluation time instead of poisoning the whole profile load.

use serde::{Deserialize, Serialize};

use crate::types::language::Language;
use crate::types::quality::{QualitySource, Resolution};

/// Flags reported by the originating indexer for a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexerFlag {
    Freeleech,
    Halfleech,
    DoubleUpload,
    Internal,
    Scene,
    Nuked,
}

impl std::fmt::Display for IndexerFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexerFlag::Freeleech => write!(f, "Freeleech"),
            IndexerFlag::Halfleech => write!(f, "Halfleech"),
            IndexerFlag::DoubleUpload => write!(f, "DoubleUpload"),
            IndexerFlag::Internal => write!(f, "Internal"),
            IndexerFlag::Scene => write!(f, "Scene"),
            IndexerFlag::Nuked => write!(f, "Nuked"),
        }
    }
}

/// The predicate half of a specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpecificationMatcher {
    /// Case-insensitive regex over the original release title.
    ReleaseTitle { pattern: String },
    /// Half-open size window: `min_bytes < size <= max_bytes`.
    Size { min_bytes: u64, max_bytes: u64 },
    /// At least one of the listed languages is present on the candidate.
    Language { languages: Vec<Language> },
    /// Resolved quality source equals the given source.
    Source { source: QualitySource },
    /// Resolved resolution tier equals the given tier.
    Resolution { resolution: Resolution },
    /// The release carries the given indexer flag.
    IndexerFlag { flag: IndexerFlag },
    /// Catch-all for kinds this engine version does not know. Fails closed.
    #[serde(other)]
    Unknown,
}

/// One atomic rule inside a custom format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    /// XORs the raw predicate result.
    #[serde(default)]
    pub negate: bool,
    /// A failing required specification short-circuits the format; it never
    /// changes the final AND, only when evaluation stops.
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub matcher: SpecificationMatcher,
}

/// A named, reusable rule set evaluated against one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFormat {
    pub id: i32,
    pub name: String,
    /// Zero specifications means the format matches unconditionally.
    #[serde(default)]
    pub specifications: Vec<Specification>,
}

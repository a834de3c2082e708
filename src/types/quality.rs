//! Quality tiers and revisions for candidate releases.
//!
//! A `Quality` has no intrinsic ordering of its own; ranking always goes
//! through a profile's weight table (`QualityProfile::weight_of`). Ties at
//! equal weight are broken by `Revision`, which orders by version, then the
//! `real` flag, then `is_repack` as a final tie-break modifier.

use serde::{Deserialize, Serialize};

/// How the release was sourced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum QualitySource {
    #[default]
    Unknown,
    Rip,
    Digital,
    Disc,
}

impl std::fmt::Display for QualitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualitySource::Unknown => write!(f, "Unknown"),
            QualitySource::Rip => write!(f, "Rip"),
            QualitySource::Digital => write!(f, "Digital"),
            QualitySource::Disc => write!(f, "Disc"),
        }
    }
}

/// Resolution tier parsed from release names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Resolution {
    #[default]
    Unknown,
    R480,
    R720,
    R1080,
    R2160,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Unknown => write!(f, "Unknown"),
            Resolution::R480 => write!(f, "480p"),
            Resolution::R720 => write!(f, "720p"),
            Resolution::R1080 => write!(f, "1080p"),
            Resolution::R2160 => write!(f, "2160p"),
        }
    }
}

/// A quality tier: source plus resolution. Identity only; ranking is owned
/// by the profile weight table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quality {
    pub source: QualitySource,
    pub resolution: Resolution,
}

impl Quality {
    pub fn new(source: QualitySource, resolution: Resolution) -> Self {
        Self { source, resolution }
    }

    pub fn is_unknown(&self) -> bool {
        self.source == QualitySource::Unknown && self.resolution == Resolution::Unknown
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.source, self.resolution)
    }
}

/// Revision counter attached to a quality: higher version wins, `real` beats
/// non-real, `is_repack` only breaks remaining ties. Field order matters:
/// the derived lexicographic ordering encodes exactly that precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Revision {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub real: bool,
    #[serde(default)]
    pub is_repack: bool,
}

fn default_version() -> u32 {
    1
}

impl Default for Revision {
    fn default() -> Self {
        Self {
            version: 1,
            real: false,
            is_repack: false,
        }
    }
}

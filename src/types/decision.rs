//! Accept/reject/upgrade verdicts and their structured rejection reasons.

use serde::{Deserialize, Serialize};

use crate::types::quality::{Quality, Revision};

/// Structured reason explaining why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Rejection {
    /// Format score fell below the profile minimum.
    BelowMinFormatScore { score: i32, min_score: i32 },
    /// Candidate quality is not an allowed tier in the profile.
    QualityNotAllowed,
    /// Existing file already has strictly higher quality.
    QualityDowngrade,
    /// Equal quality, but the format score delta is under the profile gate.
    InsufficientFormatUpgrade { delta: i32, required: i32 },
    /// Profile structure is broken; every decision for it would be suspect.
    InvalidProfileConfiguration { detail: String },
}

impl Rejection {
    /// Stable operator-facing reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::BelowMinFormatScore { .. } => "below-min-format-score",
            Rejection::QualityNotAllowed => "quality-not-allowed",
            Rejection::QualityDowngrade => "quality-downgrade",
            Rejection::InsufficientFormatUpgrade { .. } => "insufficient-format-upgrade",
            Rejection::InvalidProfileConfiguration { .. } => "invalid-profile-configuration",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::BelowMinFormatScore { score, min_score } => {
                write!(f, "format score {score} below profile minimum {min_score}")
            }
            Rejection::QualityNotAllowed => write!(f, "quality not allowed by profile"),
            Rejection::QualityDowngrade => write!(f, "existing file has higher quality"),
            Rejection::InsufficientFormatUpgrade { delta, required } => {
                write!(f, "format score delta {delta} below upgrade minimum {required}")
            }
            Rejection::InvalidProfileConfiguration { detail } => {
                write!(f, "invalid profile configuration: {detail}")
            }
        }
    }
}

/// Snapshot of the file a candidate would replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingFileSnapshot {
    pub quality: Quality,
    #[serde(default)]
    pub revision: Revision,
    #[serde(default)]
    pub format_score: i32,
}

/// Immutable verdict for one candidate. A rejected decision always carries
/// at least one reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub accepted: bool,
    pub is_upgrade: bool,
    #[serde(default)]
    pub rejections: Vec<Rejection>,
    /// Existing file is still below the profile's quality or format cutoff.
    /// Reporting-only; never feeds the accept/reject branch.
    #[serde(default)]
    pub cutoff_not_met: bool,
}

impl Decision {
    pub fn accepted_new(cutoff_not_met: bool) -> Self {
        Self {
            accepted: true,
            is_upgrade: false,
            rejections: Vec::new(),
            cutoff_not_met,
        }
    }

    pub fn accepted_upgrade(cutoff_not_met: bool) -> Self {
        Self {
            accepted: true,
            is_upgrade: true,
            rejections: Vec::new(),
            cutoff_not_met,
        }
    }

    pub fn rejected(rejections: Vec<Rejection>, cutoff_not_met: bool) -> Self {
        debug_assert!(!rejections.is_empty(), "rejections must carry a reason");
        Self {
            accepted: false,
            is_upgrade: false,
            rejections,
            cutoff_not_met,
        }
    }
}

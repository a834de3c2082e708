//! Quality profiles: allowed tiers, cutoff, and format scoring table.

use serde::{Deserialize, Serialize};

use crate::types::errors::{ProfileError, ProfileResult};
use crate::types::format::CustomFormat;
use crate::types::quality::Quality;

/// One entry in a profile's ordered quality ladder. Position in the list is
/// the weight: index 0 is the lowest tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityProfileItem {
    pub quality: Quality,
    #[serde(default = "default_allowed")]
    pub allowed: bool,
}

fn default_allowed() -> bool {
    true
}

/// Score granted by a profile when a custom format matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatItem {
    pub format_id: i32,
    pub score: i32,
}

/// Read-only reference data supplied by the caller for every decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityProfile {
    pub name: String,
    /// Ordered ladder of quality tiers, ascending weight.
    pub items: Vec<QualityProfileItem>,
    /// Tier at/above which no further quality upgrade is sought.
    pub cutoff: Quality,
    #[serde(default)]
    pub format_items: Vec<FormatItem>,
    /// Minimum format score to accept a candidate at all.
    #[serde(default)]
    pub min_format_score: i32,
    /// Score at which format-based upgrading stops.
    #[serde(default)]
    pub cutoff_format_score: i32,
    /// Minimum score delta to replace an existing file of equal quality.
    #[serde(default)]
    pub min_upgrade_format_score: i32,
}

impl QualityProfile {
    /// Weight of a quality in this profile's ladder, or `None` when the
    /// quality is not listed at all.
    pub fn weight_of(&self, quality: &Quality) -> Option<usize> {
        self.items.iter().position(|item| item.quality == *quality)
    }

    pub fn is_allowed(&self, quality: &Quality) -> bool {
        self.items
            .iter()
            .any(|item| item.allowed && item.quality == *quality)
    }

    /// Profile score for one format id; formats absent from the table
    /// contribute zero regardless of match.
    pub fn score_for(&self, format_id: i32) -> i32 {
        self.format_items
            .iter()
            .find(|item| item.format_id == format_id)
            .map(|item| item.score)
            .unwrap_or(0)
    }

    /// Structural self-check: the cutoff must be an allowed ladder entry.
    pub fn validate(&self) -> ProfileResult<()> {
        if !self.items.iter().any(|item| item.allowed) {
            return Err(ProfileError::NoAllowedQualities {
                profile: self.name.clone(),
            });
        }
        if !self.is_allowed(&self.cutoff) {
            return Err(ProfileError::CutoffNotAllowed {
                profile: self.name.clone(),
                cutoff: self.cutoff.to_string(),
            });
        }
        Ok(())
    }

    /// Cross-check every format item against the supplied definitions.
    pub fn validate_format_refs(&self, formats: &[CustomFormat]) -> ProfileResult<()> {
        for item in &self.format_items {
            if !formats.iter().any(|format| format.id == item.format_id) {
                return Err(ProfileError::UnknownFormatReference {
                    profile: self.name.clone(),
                    format_id: item.format_id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quality::{QualitySource, Resolution};

    fn ladder() -> Vec<QualityProfileItem> {
        vec![
            QualityProfileItem {
                quality: Quality::new(QualitySource::Rip, Resolution::R480),
                allowed: true,
            },
            QualityProfileItem {
                quality: Quality::new(QualitySource::Digital, Resolution::R1080),
                allowed: false,
            },
            QualityProfileItem {
                quality: Quality::new(QualitySource::Disc, Resolution::R1080),
                allowed: true,
            },
        ]
    }

    #[test]
    fn test_weight_follows_ladder_order() {
        let profile = QualityProfile {
            name: "default".into(),
            items: ladder(),
            cutoff: Quality::new(QualitySource::Disc, Resolution::R1080),
            format_items: Vec::new(),
            min_format_score: 0,
            cutoff_format_score: 0,
            min_upgrade_format_score: 0,
        };
        assert_eq!(
            profile.weight_of(&Quality::new(QualitySource::Rip, Resolution::R480)),
            Some(0)
        );
        assert_eq!(
            profile.weight_of(&Quality::new(QualitySource::Disc, Resolution::R1080)),
            Some(2)
        );
        assert_eq!(profile.weight_of(&Quality::default()), None);
    }

    #[test]
    fn test_validate_rejects_disallowed_cutoff() {
        let profile = QualityProfile {
            name: "default".into(),
            items: ladder(),
            cutoff: Quality::new(QualitySource::Digital, Resolution::R1080),
            format_items: Vec::new(),
            min_format_score: 0,
            cutoff_format_score: 0,
            min_upgrade_format_score: 0,
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::CutoffNotAllowed { .. })
        ));
    }

    #[test]
    fn test_score_for_unlisted_format_is_zero() {
        let profile = QualityProfile {
            name: "default".into(),
            items: ladder(),
            cutoff: Quality::new(QualitySource::Disc, Resolution::R1080),
            format_items: vec![FormatItem {
                format_id: 3,
                score: 50,
            }],
            min_format_score: 0,
            cutoff_format_score: 0,
            min_upgrade_format_score: 0,
        };
        assert_eq!(profile.score_for(3), 50);
        assert_eq!(profile.score_for(99), 0);
    }
}

pub mod attributes;
pub mod decision;
pub mod errors;
pub mod evidence;
pub mod format;
pub mod language;
pub mod profile;
pub mod quality;

pub use attributes::{CandidateAttributes, MatchedFormat, SubtitleInfo};
pub use decision::{Decision, ExistingFileSnapshot, Rejection};
pub use errors::{ProfileError, ProfileResult};
pub use evidence::{
    DownloadClientItem, Evidence, GameContext, GrabHistory, IndexerSettings, MediaInfo,
};
pub use format::{CustomFormat, IndexerFlag, Specification, SpecificationMatcher};
pub use language::Language;
pub use profile::{FormatItem, QualityProfile, QualityProfileItem};
pub use quality::{Quality, QualitySource, Resolution, Revision};

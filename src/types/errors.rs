use serde::Serialize;
use thiserror::Error;

/// Structural problems in a quality profile. These are configuration errors
/// owned by the caller; the engine surfaces them as a rejection rather than
/// silently producing unreliable decisions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("cutoff quality '{cutoff}' is not an allowed quality in profile '{profile}'")]
    CutoffNotAllowed { profile: String, cutoff: String },
    #[error("profile '{profile}' references unknown custom format id {format_id}")]
    UnknownFormatReference { profile: String, format_id: i32 },
    #[error("profile '{profile}' has no allowed qualities")]
    NoAllowedQualities { profile: String },
}

impl Serialize for ProfileError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

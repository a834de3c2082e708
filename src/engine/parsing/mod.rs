pub mod language;
pub mod quality;
pub mod release;
pub mod subtitle;

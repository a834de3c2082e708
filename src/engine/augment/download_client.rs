//! Download-client-reported evidence (order 3).
//!
//! The client report also feeds the edition/release-group fallback chain in
//! `engine::resolve::fallback`, where it is the strongest link.

use crate::engine::augment::{LanguageConfidence, LanguageSignal};
use crate::types::evidence::Evidence;

pub fn languages(evidence: &Evidence) -> Option<LanguageSignal> {
    let item = evidence.download_client.as_ref()?;
    (!item.languages.is_empty()).then(|| LanguageSignal {
        languages: item.languages.clone(),
        confidence: LanguageConfidence::DownloadClientItem,
    })
}

//! First-non-blank fallback chains for edition and release group.
//!
//! Fixed order: download-client report, folder name, file name. The first
//! source yielding a non-blank value wins and later sources are never
//! consulted. This is deliberately not the confidence-ranked fusion used
//! for languages.

use crate::engine::parsing::release::{parse_edition, parse_release_group};
use crate::types::evidence::Evidence;

pub fn resolve_edition(evidence: &Evidence) -> String {
    let client_edition = evidence
        .download_client
        .as_ref()
        .and_then(|item| item.edition.clone());

    first_non_blank([
        client_edition,
        parse_edition(&evidence.folder_name),
        parse_edition(&evidence.file_name),
    ])
}

pub fn resolve_release_group(evidence: &Evidence) -> String {
    let client_group = evidence
        .download_client
        .as_ref()
        .and_then(|item| item.release_group.clone());

    first_non_blank([
        client_group,
        parse_release_group(&evidence.folder_name),
        parse_release_group(&evidence.file_name),
    ])
}

fn first_non_blank(sources: [Option<String>; 3]) -> String {
    for source in sources {
        if let Some(value) = source {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    String::new()
}

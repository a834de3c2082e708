//! Language values for release attribute resolution.
//!
//! Two sentinels: `Unknown` (no language determined) and `Original`
//! (placeholder for the game's catalog-declared original language).
//! `Original` never survives resolution; see `engine::resolve::language`.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Language {
    #[default]
    Unknown,
    Original,
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Russian,
    Polish,
    Dutch,
    Japanese,
    Korean,
    Chinese,
    Czech,
    Swedish,
    Danish,
    Norwegian,
    Finnish,
    Hungarian,
    Turkish,
    Arabic,
}

impl Language {
    /// Map an ISO-639 audio-track code (two- or three-letter) to a language.
    /// Unrecognized codes are skipped by callers, never treated as errors.
    pub fn from_audio_code(code: &str) -> Option<Language> {
        let code = code.trim().to_lowercase();
        let language = match code.as_str() {
            "en" | "eng" => Language::English,
            "fr" | "fre" | "fra" => Language::French,
            "de" | "ger" | "deu" => Language::German,
            "es" | "spa" => Language::Spanish,
            "it" | "ita" => Language::Italian,
            "pt" | "por" => Language::Portuguese,
            "ru" | "rus" => Language::Russian,
            "pl" | "pol" => Language::Polish,
            "nl" | "dut" | "nld" => Language::Dutch,
            "ja" | "jpn" => Language::Japanese,
            "ko" | "kor" => Language::Korean,
            "zh" | "chi" | "zho" => Language::Chinese,
            "cs" | "cze" | "ces" => Language::Czech,
            "sv" | "swe" => Language::Swedish,
            "da" | "dan" => Language::Danish,
            "no" | "nor" => Language::Norwegian,
            "fi" | "fin" => Language::Finnish,
            "hu" | "hun" => Language::Hungarian,
            "tr" | "tur" => Language::Turkish,
            "ar" | "ara" => Language::Arabic,
            _ => return None,
        };
        Some(language)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Unknown => "Unknown",
            Language::Original => "Original",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Polish => "Polish",
            Language::Dutch => "Dutch",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
            Language::Czech => "Czech",
            Language::Swedish => "Swedish",
            Language::Danish => "Danish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Hungarian => "Hungarian",
            Language::Turkish => "Turkish",
            Language::Arabic => "Arabic",
        };
        write!(f, "{name}")
    }
}

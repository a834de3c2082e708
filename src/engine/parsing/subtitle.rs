//! Subtitle file-name parsing, in two modes.
//!
//! Full mode splits a name into a title portion plus trailing language/flag
//! tags. Basic mode only collects language tags, for names whose "title" is
//! really the companion media title and must not leak into the tag list.

use crate::engine::normalizer;
use crate::engine::parsing::language::language_for_token;
use crate::types::language::Language;

/// Tokens that mark a subtitle variant rather than a language. Consumed as
/// tags but carry no language value.
const VARIANT_TOKENS: &[&str] = &["forced", "sdh", "cc", "hi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleParseMode {
    Full,
    Basic,
}

/// One recognized language tag and the token it came from. The source token
/// is kept so the resolver can drop tags already present in the media title.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTag {
    pub token: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSubtitle {
    /// Title portion, `None` in basic mode or when only tags were present.
    pub title: Option<String>,
    pub tags: Vec<LanguageTag>,
}

/// Parse a subtitle file name. Total: unparseable names yield an empty
/// result, never an error.
pub fn parse_subtitle(file_name: &str, mode: SubtitleParseMode) -> ParsedSubtitle {
    let stem = normalizer::strip_extension(file_name.trim());
    let tokens = normalizer::tokenize(stem);

    match mode {
        SubtitleParseMode::Basic => ParsedSubtitle {
            title: None,
            tags: collect_tags(&tokens),
        },
        SubtitleParseMode::Full => {
            let mut split = tokens.len();
            while split > 0 {
                let token = &tokens[split - 1];
                if language_for_token(token).is_some() || VARIANT_TOKENS.contains(&token.as_str())
                {
                    split -= 1;
                } else {
                    break;
                }
            }

            let title = (split > 0).then(|| tokens[..split].join(" "));
            ParsedSubtitle {
                title,
                tags: collect_tags(&tokens[split..]),
            }
        }
    }
}

fn collect_tags(tokens: &[String]) -> Vec<LanguageTag> {
    let mut tags = Vec::new();
    for token in tokens {
        if let Some(language) = language_for_token(token) {
            if !tags
                .iter()
                .any(|tag: &LanguageTag| tag.language == language)
            {
                tags.push(LanguageTag {
                    token: token.clone(),
                    language,
                });
            }
        }
    }
    tags
}

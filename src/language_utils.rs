use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Resolves ISO 639-1 (2-letter) and ISO 639-3 (3-letter) codes and matches
/// URL path tokens against a configured language, which is how intercepted
/// subtitle payloads get assigned to a slot.
/// Resolve a language code in either ISO form.
pub fn resolve_language(code: &str) -> Result<Language> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    };

    language.ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Check if two language codes represent the same language, across ISO
/// 639-1 and 639-3 forms.
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (resolve_language(code1), resolve_language(code2)) {
        (Ok(lang1), Ok(lang2)) => lang1 == lang2,
        _ => false,
    }
}

/// Check whether a URL names the given language.
///
/// A URL names a language when one of its `/ _ - .`-delimited tokens is
/// the language's ISO 639-1 code, its ISO 639-3 code, or its lowercase
/// English name ("subs/eng/track.vtt", "movie_russian.srt").
pub fn url_mentions_language(url: &str, code: &str) -> bool {
    let Ok(language) = resolve_language(code) else {
        return false;
    };

    url.to_lowercase()
        .split(['/', '_', '-', '.'])
        .filter(|token| !token.is_empty())
        .any(|token| token_is_language(token, language))
}

fn token_is_language(token: &str, language: Language) -> bool {
    if token == language.to_639_3() {
        return true;
    }
    if let Some(part1) = language.to_639_1() {
        if token == part1 {
            return true;
        }
    }
    token == language.to_name().to_lowercase()
}

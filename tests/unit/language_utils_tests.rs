/*!
 * Tests for language utilities
 */

use dualsub::language_utils::{language_codes_match, resolve_language, url_mentions_language};

/// Test resolving both ISO 639-1 and ISO 639-3 codes
#[test]
fn test_resolve_language_withValidCodes_shouldResolve() {
    assert!(resolve_language("en").is_ok());
    assert!(resolve_language("eng").is_ok());
    assert!(resolve_language("RU").is_ok());
    assert!(resolve_language(" fr ").is_ok());
}

#[test]
fn test_resolve_language_withInvalidCodes_shouldFail() {
    assert!(resolve_language("").is_err());
    assert!(resolve_language("q").is_err());
    assert!(resolve_language("xyz").is_err());
    assert!(resolve_language("english").is_err());
}

/// Test matching across ISO code forms
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("ru", "rus"));
    assert!(language_codes_match("en", "EN"));
}

#[test]
fn test_language_codes_match_withDifferentLanguages_shouldNotMatch() {
    assert!(!language_codes_match("en", "ru"));
    assert!(!language_codes_match("en", "bogus"));
}

/// URL tokens in either ISO form or the English language name count
#[test]
fn test_url_mentions_language_withTokenForms_shouldMatch() {
    assert!(url_mentions_language("https://cdn/subs/ru/track.srt", "ru"));
    assert!(url_mentions_language("https://cdn/subs/rus/track.srt", "ru"));
    assert!(url_mentions_language("https://cdn/movie_russian.srt", "ru"));
    assert!(url_mentions_language("https://cdn/movie.en.vtt", "eng"));
    assert!(url_mentions_language("https://cdn/ENG-track.vtt", "en"));
}

/// Language codes must be whole tokens; substrings never match
#[test]
fn test_url_mentions_language_withSubstringsOnly_shouldNotMatch() {
    assert!(!url_mentions_language("https://cdn/frame/track.srt", "fr"));
    assert!(!url_mentions_language("https://cdn/entrance/track.srt", "en"));
    assert!(!url_mentions_language("https://cdn/movie.srt", "ru"));
}

#[test]
fn test_url_mentions_language_withInvalidCode_shouldNotMatch() {
    assert!(!url_mentions_language("https://cdn/subs/ru/track.srt", "bogus"));
}

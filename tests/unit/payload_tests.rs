/*!
 * Tests for the intercepted payload boundary
 */

use dualsub::payload::SubtitlePayload;
use dualsub::session::TrackSlot;

/// URL sniffing accepts subtitle-shaped URLs and subtitle content types
#[test]
fn test_looks_like_subtitle_withSubtitleShapes_shouldAccept() {
    assert!(SubtitlePayload::looks_like_subtitle("https://x/subs/1.vtt", ""));
    assert!(SubtitlePayload::looks_like_subtitle("https://x/film.srt", ""));
    assert!(SubtitlePayload::looks_like_subtitle("https://x/subtitle/9", ""));
    assert!(SubtitlePayload::looks_like_subtitle("https://x/captions/a", ""));
    assert!(SubtitlePayload::looks_like_subtitle("https://x/CAPTION/a", ""));
    assert!(SubtitlePayload::looks_like_subtitle("https://x/data", "text/vtt"));
    assert!(SubtitlePayload::looks_like_subtitle("https://x/data", "application/x-srt"));
}

#[test]
fn test_looks_like_subtitle_withUnrelatedRequest_shouldReject() {
    assert!(!SubtitlePayload::looks_like_subtitle("https://x/segment-01.ts", "video/mp2t"));
    assert!(!SubtitlePayload::looks_like_subtitle("", "text/vtt"));
}

/// Hint is .vtt when either the URL or the content type names WebVTT
#[test]
fn test_format_hint_withVttMarkers_shouldReturnVtt() {
    assert_eq!(SubtitlePayload::new("https://x/track.vtt", "", "").format_hint(), ".vtt");
    assert_eq!(SubtitlePayload::new("https://x/track.VTT", "", "").format_hint(), ".vtt");
    assert_eq!(SubtitlePayload::new("https://x/track", "", "text/vtt").format_hint(), ".vtt");
}

#[test]
fn test_format_hint_withoutVttMarkers_shouldDefaultToSrt() {
    assert_eq!(SubtitlePayload::new("https://x/track.srt", "", "").format_hint(), ".srt");
    assert_eq!(SubtitlePayload::new("https://x/track", "", "text/plain").format_hint(), ".srt");
}

/// Slot detection checks the primary language first, then the secondary
#[test]
fn test_detect_slot_withLanguageTokens_shouldAssign() {
    let payload = SubtitlePayload::new("https://x/subs/russian/track.srt", "", "");
    assert_eq!(payload.detect_slot("ru", "en"), Some(TrackSlot::Primary));

    let payload = SubtitlePayload::new("https://x/movie_eng.vtt", "", "");
    assert_eq!(payload.detect_slot("ru", "en"), Some(TrackSlot::Secondary));

    let payload = SubtitlePayload::new("https://x/movie.vtt", "", "");
    assert_eq!(payload.detect_slot("ru", "en"), None);
}

/// Payloads arrive as camelCase JSON from the interception collaborator
#[test]
fn test_payload_deserialization_withCamelCaseJson_shouldParse() {
    let json = r#"{"url":"https://x/track.vtt","text":"WEBVTT","contentType":"text/vtt"}"#;
    let payload: SubtitlePayload = serde_json::from_str(json).unwrap();

    assert_eq!(payload.url, "https://x/track.vtt");
    assert_eq!(payload.text, "WEBVTT");
    assert_eq!(payload.content_type, "text/vtt");
}

/// content_type is optional on the wire
#[test]
fn test_payload_deserialization_withoutContentType_shouldDefaultEmpty() {
    let json = r#"{"url":"https://x/track.srt","text":"1"}"#;
    let payload: SubtitlePayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.content_type, "");
}

/*!
 * Tests for timecode parsing and formatting
 */

use dualsub::timecode::{format_timecode, parse_timecode};

/// Test full HH:MM:SS,mmm parsing
#[test]
fn test_parse_timecode_withHoursAndCommaFraction_shouldParse() {
    assert_eq!(parse_timecode("01:02:03,456"), Some(3_723_456));
}

/// Test MM:SS.mmm parsing with implicit zero hours
#[test]
fn test_parse_timecode_withMinutesAndDotFraction_shouldAssumeZeroHours() {
    assert_eq!(parse_timecode("02:03.500"), Some(123_500));
}

#[test]
fn test_parse_timecode_withWholeSeconds_shouldParse() {
    assert_eq!(parse_timecode("00:00:05"), Some(5_000));
    assert_eq!(parse_timecode("10:00"), Some(600_000));
}

#[test]
fn test_parse_timecode_withSurroundingWhitespace_shouldTrim() {
    assert_eq!(parse_timecode("  00:00:01,000 "), Some(1_000));
}

/// Failure sentinel is None, never zero
#[test]
fn test_parse_timecode_withGarbage_shouldReturnNone() {
    assert_eq!(parse_timecode("bad"), None);
    assert_eq!(parse_timecode(""), None);
    assert_eq!(parse_timecode("12"), None);
}

/// Exactly 2 or 3 colon components are valid
#[test]
fn test_parse_timecode_withWrongComponentCount_shouldReturnNone() {
    assert_eq!(parse_timecode("1:2:3:4"), None);
    assert_eq!(parse_timecode("::"), None);
}

#[test]
fn test_parse_timecode_withNonNumericComponent_shouldReturnNone() {
    assert_eq!(parse_timecode("aa:bb:cc"), None);
    assert_eq!(parse_timecode("00:xx:01"), None);
}

/// Components must be non-negative and finite
#[test]
fn test_parse_timecode_withNegativeComponent_shouldReturnNone() {
    assert_eq!(parse_timecode("01:-2:03"), None);
    assert_eq!(parse_timecode("-1:02"), None);
}

/// Sub-millisecond fractions round half-away-from-zero
#[test]
fn test_parse_timecode_withSubMillisecondFraction_shouldRoundHalfUp() {
    assert_eq!(parse_timecode("00:00.0005"), Some(1));
    assert_eq!(parse_timecode("00:00.0004"), Some(0));
    assert_eq!(parse_timecode("00:01.2345"), Some(1_235));
}

#[test]
fn test_format_timecode_withValidMs_shouldFormatSrtStyle() {
    assert_eq!(format_timecode(3_723_456), "01:02:03,456");
    assert_eq!(format_timecode(0), "00:00:00,000");
    assert_eq!(format_timecode(999), "00:00:00,999");
}

/// Parsing what we format gives back the same value
#[test]
fn test_format_timecode_withParseRoundTrip_shouldAgree() {
    for ms in [0u64, 1_000, 59_999, 3_600_000, 5_025_678] {
        assert_eq!(parse_timecode(&format_timecode(ms)), Some(ms));
    }
}

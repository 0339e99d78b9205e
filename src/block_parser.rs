use once_cell::sync::Lazy;
use regex::Regex;

use crate::timecode::parse_timecode;
use crate::track::Cue;

// @module: Single-block cue parsing

// @const: Timecode range separator, whitespace around the arrow required
static TIMECODE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+-->\s+").unwrap());

// @const: Angle-bracket markup tags (e.g. <b>, <v Speaker>)
static ANGLE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

// @const: Curly-brace styling/positioning directives (e.g. {\an8})
static BRACE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]+\}").unwrap());

/// Parse one blank-line-delimited block into a cue.
///
/// Returns `None` for anything that does not yield a displayable cue: no
/// timecode line, an unparseable timecode, `end <= start`, or text that is
/// empty after cleaning. A sequence-number header line needs no special
/// handling — it simply never matches the timecode pattern and the scan
/// moves past it.
pub fn parse_block(block: &str) -> Option<Cue> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }

    let time_line_index = lines
        .iter()
        .position(|line| TIMECODE_SEPARATOR.is_match(line))?;

    let mut range = TIMECODE_SEPARATOR.splitn(lines[time_line_index], 2);
    let start_raw = range.next()?;
    let end_raw_with_meta = range.next()?;
    // Cue-settings tokens after the end time (VTT "align:..." and friends)
    // are discarded; only the first whitespace-delimited token is the time.
    let end_raw = end_raw_with_meta.split_whitespace().next()?;

    let start_ms = parse_timecode(start_raw)?;
    let end_ms = parse_timecode(end_raw)?;
    if end_ms <= start_ms {
        return None;
    }

    let text = clean_text(&lines[time_line_index + 1..].join("\n"));
    if text.is_empty() {
        return None;
    }

    Some(Cue::new(start_ms, end_ms, text))
}

/// Strip angle-bracket and curly-brace markup, drop carriage returns, and
/// trim surrounding whitespace.
pub fn clean_text(text: &str) -> String {
    let without_tags = ANGLE_TAG.replace_all(text, "");
    let without_braces = BRACE_TAG.replace_all(&without_tags, "");
    without_braces.replace('\r', "").trim().to_string()
}

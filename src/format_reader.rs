use log::debug;

use crate::block_parser::parse_block;
use crate::track::Track;

// @module: Whole-document subtitle reading (SRT / WebVTT)

/// WebVTT file signature
const VTT_SIGNATURE: &str = "WEBVTT";

/// Wire format of a subtitle document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

/// Pick the parsing rules for a document.
///
/// The hint wins over content sniffing, and SRT is checked first: a hint
/// naming `.srt` parses as SRT even if the body happens to start with
/// `WEBVTT`. Without a usable hint, a `WEBVTT` signature selects VTT and
/// everything else defaults to SRT.
pub fn detect_format(format_hint: &str, text: &str) -> SubtitleFormat {
    if format_hint.contains(".srt") {
        SubtitleFormat::Srt
    } else if format_hint.contains(".vtt") {
        SubtitleFormat::Vtt
    } else if text.starts_with(VTT_SIGNATURE) {
        SubtitleFormat::Vtt
    } else {
        SubtitleFormat::Srt
    }
}

/// Parse a whole subtitle document into a track.
///
/// Line endings are normalized (CRLF to LF) before any other processing.
/// Malformed blocks contribute zero cues and parsing continues; a document
/// that yields no cues at all produces an empty track, which is a valid
/// result, not an error.
pub fn read_track(raw_text: &str, format_hint: &str) -> Track {
    let text = raw_text.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return Track::new();
    }

    match detect_format(format_hint, &text) {
        SubtitleFormat::Srt => parse_srt(&text),
        SubtitleFormat::Vtt => parse_vtt(&text),
    }
}

fn parse_srt(text: &str) -> Track {
    collect_cues(text)
}

fn parse_vtt(text: &str) -> Track {
    collect_cues(strip_vtt_prologue(text))
}

fn collect_cues(text: &str) -> Track {
    let mut cues = Vec::new();
    for block in split_blocks(text) {
        match parse_block(&block) {
            Some(cue) => cues.push(cue),
            None => debug!("Dropped block with no usable cue: {:?}", first_line(&block)),
        }
    }
    Track::from_cues(cues)
}

/// Strip the WebVTT signature line and any header metadata up through the
/// first blank line. Anchored: only a document that actually starts with
/// the signature is touched, and a signature with no blank-line boundary
/// afterwards leaves the document unchanged (the signature line then falls
/// through block parsing, where it never matches the timecode pattern).
fn strip_vtt_prologue(text: &str) -> &str {
    if !text.starts_with(VTT_SIGNATURE) {
        return text;
    }
    match text.find("\n\n") {
        Some(boundary) => &text[boundary + 2..],
        None => text,
    }
}

/// Split a document into blocks on runs of one-or-more blank lines.
///
/// A blank line is a truly empty line; lines of only whitespace belong to
/// the surrounding block (and get trimmed away during block parsing).
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}

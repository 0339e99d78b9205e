use crate::track::{Cue, MergedCue, Track};

// @module: Active-cue resolution and bilingual track merging

/// Default tolerance window for the merge, in milliseconds.
pub const DEFAULT_TOLERANCE_MS: u64 = 300;

/// Resolve the active cue for a playback position.
///
/// Returns the first cue in track order with
/// `start_ms <= time_ms <= end_ms`, both bounds inclusive. Every call is a
/// fresh scan from the start of the track, so out-of-order timestamps
/// (seeks) need no special handling. When malformed sources produce
/// overlapping cues, first-in-order wins.
pub fn find_active(track: &Track, time_ms: u64) -> Option<&Cue> {
    track
        .iter()
        .find(|cue| cue.start_ms <= time_ms && time_ms <= cue.end_ms)
}

/// Merge two independently-timed tracks into one bilingual cue stream.
///
/// The primary track drives enumeration: one `MergedCue` is emitted per
/// primary cue, always, carrying the primary cue's timing. Each primary cue
/// is paired with the first secondary cue (in secondary-track order) that
/// tolerant-overlaps it; primary cues with no match get an empty
/// `secondary_text`, and secondary cues that match nothing are dropped.
pub fn merge(primary: &Track, secondary: &Track, tolerance_ms: u64) -> Vec<MergedCue> {
    primary
        .iter()
        .map(|p| {
            let matched = secondary
                .iter()
                .find(|s| tolerant_overlap(p, s, tolerance_ms));
            MergedCue {
                start_ms: p.start_ms,
                end_ms: p.end_ms,
                primary_text: p.text.clone(),
                secondary_text: matched.map(|s| s.text.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

/// Overlap-or-gap-within-tolerance test.
///
/// Deliberately asymmetric: only the earliest-end bound is expanded
/// outward by the tolerance, not both bounds. Two intervals count as
/// synchronized when the earliest end time, pushed forward by the
/// tolerance window, still reaches the latest start time.
///
/// The expansion saturates: an enormous hours component clamps to
/// `u64::MAX` during timecode parsing, and adding the tolerance on top
/// of that must not wrap.
fn tolerant_overlap(a: &Cue, b: &Cue, tolerance_ms: u64) -> bool {
    let latest_start = a.start_ms.max(b.start_ms);
    let earliest_end = a.end_ms.min(b.end_ms);
    earliest_end.saturating_add(tolerance_ms) >= latest_start
}

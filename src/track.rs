use std::fmt;

use crate::timecode;

// @module: Cue and track data model

// @struct: Single timed subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Start time in ms
    pub start_ms: u64,

    // @field: End time in ms
    pub end_ms: u64,

    // @field: Cleaned subtitle text
    pub text: String,
}

impl Cue {
    /// Creates a new cue. Callers are expected to hand in already-cleaned
    /// text and a valid time range; block parsing enforces both before
    /// constructing cues.
    pub fn new(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Cue {
            start_ms,
            end_ms,
            text: text.into(),
        }
    }
}

/// Ordered sequence of cues for one subtitle language/source.
///
/// Cues stay in source-block order: malformed sources may contain
/// overlapping cues and the model does not reject, re-sort, or repair them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    /// Cues in source order
    pub cues: Vec<Cue>,
}

impl Track {
    /// Create an empty track
    pub fn new() -> Self {
        Track { cues: Vec::new() }
    }

    /// Build a track from an already-ordered cue sequence
    pub fn from_cues(cues: Vec<Cue>) -> Self {
        Track { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// An empty track means "no subtitles available for this slot",
    /// never a failure.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }
}

/// Bilingual display unit anchored to one primary-track cue's timing,
/// carrying the text of the first tolerant-overlapping secondary cue
/// (empty when none matched). Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCue {
    /// Start time in ms, copied from the primary cue
    pub start_ms: u64,

    /// End time in ms, copied from the primary cue
    pub end_ms: u64,

    /// Primary-track text
    pub primary_text: String,

    /// Secondary-track text, or empty when no secondary cue matched
    pub secondary_text: String,
}

impl MergedCue {
    pub fn has_secondary(&self) -> bool {
        !self.secondary_text.is_empty()
    }
}

impl fmt::Display for MergedCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} --> {}",
            timecode::format_timecode(self.start_ms),
            timecode::format_timecode(self.end_ms)
        )?;
        writeln!(f, "{}", self.primary_text)?;
        if self.has_secondary() {
            writeln!(f, "{}", self.secondary_text)?;
        }
        Ok(())
    }
}

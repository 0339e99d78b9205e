use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use crate::app_config::Config;
use crate::format_reader::read_track;
use crate::payload::SubtitlePayload;
use crate::synchronizer::{find_active, merge};
use crate::track::{MergedCue, Track};

// @module: Caller-owned playback session state

/// Language slot within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSlot {
    /// First language (bottom line by default)
    Primary,
    /// Second language
    Secondary,
}

/// Explicit context object holding everything the engine needs across
/// calls: the two track slots, the display settings, and the merge
/// tolerance. The parsing and merge functions themselves stay pure; this
/// is the one place where state lives.
///
/// Track publication is atomic at whole-track granularity: a slot holds an
/// `Arc<Track>` behind a lock, a new track replaces the old one as a single
/// unit (last-write-wins), and every lookup clones the `Arc` so it reads
/// one consistent snapshot even while a newer payload races in.
pub struct PlayerSession {
    /// Language code expected for the primary slot
    primary_language: String,

    /// Language code expected for the secondary slot
    secondary_language: String,

    /// Tolerance window for the bilingual merge, in ms
    tolerance_ms: u64,

    /// Whether display lines are produced at all
    enabled: bool,

    /// Secondary language on the first line instead of the second
    swap_order: bool,

    primary: RwLock<Option<Arc<Track>>>,
    secondary: RwLock<Option<Arc<Track>>>,
}

impl PlayerSession {
    /// Create a session from persisted configuration.
    pub fn new(config: &Config) -> Self {
        PlayerSession {
            primary_language: config.primary_language.clone(),
            secondary_language: config.secondary_language.clone(),
            tolerance_ms: config.sync.tolerance_ms,
            enabled: config.display.enabled,
            swap_order: config.display.swap_order,
            primary: RwLock::new(None),
            secondary: RwLock::new(None),
        }
    }

    /// Publish a fully-built track into a slot, replacing whatever was
    /// there. Last write wins; tracks never accumulate across payloads.
    pub fn install(&self, slot: TrackSlot, track: Track) {
        info!(
            "Installing {} cue(s) into {:?} slot",
            track.len(),
            slot
        );
        let published = Some(Arc::new(track));
        match slot {
            TrackSlot::Primary => *self.primary.write() = published,
            TrackSlot::Secondary => *self.secondary.write() = published,
        }
    }

    /// Snapshot of the track currently in a slot, if any.
    pub fn track(&self, slot: TrackSlot) -> Option<Arc<Track>> {
        match slot {
            TrackSlot::Primary => self.primary.read().clone(),
            TrackSlot::Secondary => self.secondary.read().clone(),
        }
    }

    /// Parse an intercepted payload and install the result.
    ///
    /// The slot is chosen by URL language detection against the configured
    /// codes, falling back to "primary while the primary slot is empty,
    /// secondary afterwards". A payload that parses to zero cues is
    /// ignored and leaves both slots untouched.
    pub fn ingest(&self, payload: &SubtitlePayload) -> Option<TrackSlot> {
        let track = read_track(&payload.text, payload.format_hint());
        if track.is_empty() {
            debug!("Payload from {} parsed to zero cues, ignoring", payload.url);
            return None;
        }

        let slot = payload
            .detect_slot(&self.primary_language, &self.secondary_language)
            .unwrap_or_else(|| {
                if self.track(TrackSlot::Primary).is_none() {
                    TrackSlot::Primary
                } else {
                    TrackSlot::Secondary
                }
            });

        self.install(slot, track);
        Some(slot)
    }

    /// Resolve the two display lines for a playback position.
    ///
    /// Each slot is resolved independently with a fresh active-cue scan; a
    /// slot with no track or no active cue contributes an empty line. When
    /// the session is disabled both lines are empty.
    pub fn display_lines(&self, time_ms: u64) -> (String, String) {
        if !self.enabled {
            return (String::new(), String::new());
        }

        let first = self.line_for(TrackSlot::Primary, time_ms);
        let second = self.line_for(TrackSlot::Secondary, time_ms);

        if self.swap_order {
            (second, first)
        } else {
            (first, second)
        }
    }

    fn line_for(&self, slot: TrackSlot, time_ms: u64) -> String {
        self.track(slot)
            .and_then(|track| find_active(&track, time_ms).map(|cue| cue.text.clone()))
            .unwrap_or_default()
    }

    /// Compute the bilingual cue stream for the current pair of tracks.
    /// Empty when the primary slot is empty or unset.
    pub fn merged_cues(&self) -> Vec<MergedCue> {
        let primary = self.track(TrackSlot::Primary).unwrap_or_default();
        let secondary = self.track(TrackSlot::Secondary).unwrap_or_default();
        merge(&primary, &secondary, self.tolerance_ms)
    }
}

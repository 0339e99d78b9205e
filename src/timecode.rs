// @module: Timecode parsing and formatting

/// Parse a textual timecode into milliseconds.
///
/// Accepts `HH:MM:SS`, `MM:SS`, and either form with a fractional seconds
/// part using `.` or `,` as the separator (`01:02:03,456`, `02:03.500`).
/// The comma is normalized to a dot before splitting, so SRT and WebVTT
/// timestamps go through the same path.
///
/// Returns `None` for anything that is not a timecode: a component count
/// other than 2 or 3, or any component that is not a finite, non-negative
/// number. `None` is the failure sentinel — callers must reject the
/// surrounding block, never substitute zero.
///
/// The result is rounded to the nearest integer millisecond,
/// half-away-from-zero.
pub fn parse_timecode(raw: &str) -> Option<u64> {
    let normalized = raw.trim().replace(',', ".");
    let parts: Vec<&str> = normalized.split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [m, s] => (0.0, parse_component(m)?, parse_component(s)?),
        [h, m, s] => (
            parse_component(h)?,
            parse_component(m)?,
            parse_component(s)?,
        ),
        _ => return None,
    };

    let total_ms = (hours * 3600.0 + minutes * 60.0 + seconds) * 1000.0;
    // The cast saturates, so absurdly large (but grammar-valid) components
    // clamp to u64::MAX instead of wrapping.
    Some(total_ms.round() as u64)
}

// Components must be finite and non-negative; "1:-2:03" is not a timecode.
fn parse_component(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Format a timestamp in milliseconds to SRT form (`HH:MM:SS,mmm`).
pub fn format_timecode(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

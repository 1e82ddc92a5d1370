use chrono::{DateTime, TimeZone, Timelike};

/// Wall-clock instant reached by adding a bar's offset to its chunk's base
/// timestamp (both in seconds).
pub fn wall_clock_time<Tz: TimeZone>(
    chunk_start: i64,
    offset_secs: f64,
    tz: &Tz,
) -> Option<DateTime<Tz>> {
    match tz.timestamp_opt(chunk_start + offset_secs as i64, 0) {
        chrono::LocalResult::Single(dt) => Some(dt),
        chrono::LocalResult::Ambiguous(dt, _) => Some(dt),
        chrono::LocalResult::None => None,
    }
}

/// `hours:minutes` axis label for a bar, unpadded.
pub fn time_label<Tz: TimeZone>(chunk_start: i64, offset_secs: f64, tz: &Tz) -> String {
    match wall_clock_time(chunk_start, offset_secs, tz) {
        Some(dt) => format!("{}:{}", dt.hour(), dt.minute()),
        // Unrepresentable instants fall back to the raw timestamp.
        None => format!("{:.0}", chunk_start as f64 + offset_secs),
    }
}

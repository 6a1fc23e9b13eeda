//! Wall-clock timestamp formatting.

use chrono::Utc;

/// Returns the current UTC time formatted as `YYYY/MM/DD HH:MM:SS.ffffff`.
///
/// Fixed width, microsecond resolution. A pure function of "now": it
/// operates only on locally-retrieved time values, so any number of threads
/// may call it at once.
pub fn timestamp() -> String {
    let now = Utc::now();
    format!(
        "{}.{:06}",
        now.format("%Y/%m/%d %H:%M:%S"),
        now.timestamp_subsec_micros()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), 26, "unexpected width: {ts}");
        let separators = [(4, b'/'), (7, b'/'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')];
        for (index, expected) in separators {
            assert_eq!(ts.as_bytes()[index], expected, "separator at {index} in {ts}");
        }
        for (index, byte) in ts.bytes().enumerate() {
            if separators.iter().all(|(sep, _)| *sep != index) {
                assert!(byte.is_ascii_digit(), "non-digit at {index} in {ts}");
            }
        }
    }

    #[test]
    fn test_timestamp_tracks_wall_clock() {
        let before = Utc::now();
        let ts = timestamp();
        let after = Utc::now();
        let parsed = NaiveDateTime::parse_from_str(&ts, "%Y/%m/%d %H:%M:%S%.6f")
            .unwrap()
            .and_utc();
        assert!(parsed >= before - Duration::seconds(1));
        assert!(parsed <= after + Duration::seconds(1));
    }
}

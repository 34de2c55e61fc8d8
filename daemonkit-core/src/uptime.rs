//! Human-readable uptime rendering
//!
//! Larger units report totals rather than remainders: 3661 seconds reads
//! "1 hours | 61 minutes".

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Render `seconds` of elapsed wall-clock time.
///
/// Negative input (a start timestamp in the future) renders as "0 seconds".
pub fn format_elapsed(seconds: i64) -> String {
    match seconds {
        t if t < 1 => "0 seconds".to_string(),
        1 => "1 second".to_string(),
        t if t < MINUTE => format!("{} seconds", t),
        MINUTE => "1 minute".to_string(),
        t if t < HOUR => format!("{} minutes", t / MINUTE),
        HOUR => "1 hour".to_string(),
        t if t < DAY => format!("{} hours | {} minutes", t / HOUR, t / MINUTE),
        DAY => "1 day".to_string(),
        t => format!("{} days | {} hours", t / DAY, t / HOUR),
    }
}

/// Uptime between a unix `started_at` and `now`, both in seconds
pub fn uptime_since(started_at: i64, now: i64) -> String {
    format_elapsed(now.saturating_sub(started_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(format_elapsed(0), "0 seconds");
        assert_eq!(format_elapsed(1), "1 second");
        assert_eq!(format_elapsed(59), "59 seconds");
        assert_eq!(format_elapsed(60), "1 minute");
        assert_eq!(format_elapsed(61), "1 minutes");
        assert_eq!(format_elapsed(3600), "1 hour");
        assert_eq!(format_elapsed(3661), "1 hours | 61 minutes");
        assert_eq!(format_elapsed(86400), "1 day");
        assert_eq!(format_elapsed(90000), "1 days | 25 hours");
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(format_elapsed(-5), "0 seconds");
        assert_eq!(uptime_since(100, 40), "0 seconds");
    }

    #[test]
    fn test_uptime_since_extremes() {
        // A zero timestamp against a realistic clock lands in the days branch
        let rendered = uptime_since(0, 1_700_000_000);
        assert!(rendered.ends_with(" hours"), "got {}", rendered);
        assert_eq!(uptime_since(i64::MIN, i64::MAX), format_elapsed(i64::MAX));
    }
}

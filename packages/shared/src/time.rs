//! Timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Get the current Unix timestamp in milliseconds (UTC).
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a Unix-millis timestamp as an RFC 3339 string with millisecond
/// precision, e.g. `2026-08-06T12:34:56.789Z`.
///
/// Out-of-range values fall back to the Unix epoch.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    let datetime: DateTime<Utc> =
        DateTime::from_timestamp_millis(timestamp_millis).unwrap_or_default();
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_rfc3339_renders_millis() {
        // 2021-01-01T00:00:00.123Z
        let rendered = timestamp_to_rfc3339(1_609_459_200_123);
        assert_eq!(rendered, "2021-01-01T00:00:00.123Z");
    }

    #[test]
    fn test_timestamp_to_rfc3339_epoch() {
        assert_eq!(timestamp_to_rfc3339(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_now_timestamp_is_recent() {
        // Any date in this century is fine; guards against unit mix-ups
        // (seconds vs milliseconds).
        let now = now_timestamp();
        assert!(now > 1_600_000_000_000, "expected millis, got {now}");
    }
}

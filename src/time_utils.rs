// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Convert a Unix timestamp (as returned in Strava token responses) to RFC3339.
pub fn unix_to_rfc3339(timestamp: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(format_utc_rfc3339)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = Utc.with_ymd_and_hms(2024, 5, 2, 6, 30, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-05-02T06:30:00Z");
    }

    #[test]
    fn test_unix_to_rfc3339() {
        assert_eq!(
            unix_to_rfc3339(1_714_631_400).as_deref(),
            Some("2024-05-02T06:30:00Z")
        );
    }
}

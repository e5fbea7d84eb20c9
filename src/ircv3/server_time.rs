//! Server-time parsing for the IRCv3 `server-time` capability.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Naive layout accepted when the value is not valid RFC 3339.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an IRCv3 server-time value.
///
/// Accepts RFC 3339 timestamps like `2023-01-01T12:00:00.000Z`, and the
/// same layout without a zone (taken as UTC), which some servers send.
/// Returns `None` for anything else.
pub fn parse_server_time(ts: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = ts.strip_suffix('Z').unwrap_or(ts);
    NaiveDateTime::parse_from_str(naive, NAIVE_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_server_time("2016-01-09T03:15:42.000Z"),
            Some(Utc.with_ymd_and_hms(2016, 1, 9, 3, 15, 42).unwrap())
        );
    }

    #[test]
    fn test_parse_offset_is_normalized() {
        assert_eq!(
            parse_server_time("2016-01-09T05:15:42+02:00"),
            Some(Utc.with_ymd_and_hms(2016, 1, 9, 3, 15, 42).unwrap())
        );
    }

    #[test]
    fn test_parse_without_zone() {
        assert_eq!(
            parse_server_time("2016-01-09T03:15:42.5"),
            Some(Utc.with_ymd_and_hms(2016, 1, 9, 3, 15, 42).unwrap()
                + chrono::Duration::milliseconds(500))
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_server_time("2016-01-09T04:20"), None);
        assert_eq!(parse_server_time("yesterday"), None);
        assert_eq!(parse_server_time(""), None);
    }
}

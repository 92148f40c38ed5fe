use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::{CoreError, CoreResult};

/// Entity identifiers are opaque strings (UUIDs for anything created here).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time truncated to whole milliseconds.
///
/// Items store timestamps with millisecond precision, so values produced
/// here survive a write/read cycle unchanged.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp as ISO-8601 with millisecond precision and a `Z`
/// suffix, e.g. `2024-05-01T12:00:00.000Z`.
///
/// Known limitation: sub-millisecond precision is dropped, so a timestamp
/// that carries microseconds does not round-trip exactly.
pub fn to_iso_string(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored ISO-8601 timestamp.
pub fn parse_iso_string(raw: &str) -> CoreResult<Timestamp> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::MalformedItem(format!("Invalid timestamp '{raw}': {e}")))
}

/// Read-side default: an absent `updatedAt` becomes the current time.
pub fn parse_or_now(raw: Option<&str>) -> CoreResult<Timestamp> {
    match raw {
        Some(raw) => parse_iso_string(raw),
        None => Ok(now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso_string_uses_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(to_iso_string(&ts), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn iso_string_truncates_sub_millisecond_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::microseconds(1_500);
        let parsed = parse_iso_string(&to_iso_string(&ts)).unwrap();
        assert_eq!(parsed, ts.trunc_subsecs(3));
        assert_ne!(parsed, ts);
    }

    #[test]
    fn now_round_trips_exactly() {
        let ts = now();
        assert_eq!(parse_iso_string(&to_iso_string(&ts)).unwrap(), ts);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_iso_string("yesterday").unwrap_err();
        assert!(matches!(err, CoreError::MalformedItem(_)));
    }

    #[test]
    fn parse_or_now_defaults_missing_value() {
        let before = now();
        let ts = parse_or_now(None).unwrap();
        assert!(ts >= before);
    }
}

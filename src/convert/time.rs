//! Timestamp conversion between `prost_types` and `chrono`

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use prost_types::Timestamp;
use tracing::warn;

/// Convert a chrono timestamp to its wire form.
///
/// A leap-second timestamp is folded into the following second, since wire
/// nanos must stay below one second.
pub fn to_wire(t: &DateTime<Utc>) -> Timestamp {
    let mut ts = Timestamp {
        seconds: t.timestamp(),
        nanos: t.timestamp_subsec_nanos() as i32,
    };
    ts.normalize();
    ts
}

/// Convert a wire timestamp to chrono.
///
/// Out-of-range nanos are normalized first. A timestamp chrono cannot
/// represent is dropped with a warning.
pub fn from_wire(ts: &Timestamp) -> Option<DateTime<Utc>> {
    let mut normalized = ts.clone();
    normalized.normalize();
    let converted = DateTime::from_timestamp(normalized.seconds, normalized.nanos as u32);
    if converted.is_none() {
        warn!(
            seconds = ts.seconds,
            nanos = ts.nanos,
            "Dropping wire timestamp outside the representable range"
        );
    }
    converted
}

pub(crate) fn time_to_wire(t: &Time) -> Timestamp {
    to_wire(&t.0)
}

pub(crate) fn time_from_wire(ts: &Timestamp) -> Option<Time> {
    from_wire(ts).map(Time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_to_wire_keeps_subsecond_precision() {
        let t = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let ts = to_wire(&t);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 123_456_789);
        assert_eq!(from_wire(&ts), Some(t));
    }

    #[test]
    fn test_to_wire_folds_leap_second() {
        let t = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap()
            .and_utc();
        assert_eq!(t.timestamp_subsec_nanos(), 1_500_000_000);

        let ts = to_wire(&t);
        assert_eq!(ts.seconds, t.timestamp() + 1);
        assert_eq!(ts.nanos, 500_000_000);
    }

    #[test]
    fn test_from_wire_normalizes_nanos() {
        let ts = Timestamp {
            seconds: 10,
            nanos: 1_500_000_000,
        };
        let t = from_wire(&ts).unwrap();
        assert_eq!(t.timestamp(), 11);
        assert_eq!(t.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn test_from_wire_out_of_range_is_dropped() {
        let ts = Timestamp {
            seconds: i64::MAX / 2,
            nanos: 0,
        };
        assert_eq!(from_wire(&ts), None);
    }

    #[test]
    fn test_epoch() {
        let ts = Timestamp::default();
        assert_eq!(from_wire(&ts), Some(DateTime::UNIX_EPOCH));
    }
}

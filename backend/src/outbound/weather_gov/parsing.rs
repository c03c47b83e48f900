//! Parsers for the loosely formatted fields of forecast periods.

use chrono::{DateTime, NaiveDateTime, Utc};

const TIMESTAMP_PREFIX_LEN: usize = 19;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse the `YYYY-MM-DDTHH:MM:SS` prefix of an upstream timestamp.
///
/// Any offset suffix is discarded rather than applied, so
/// `2022-01-01T13:00:00-05:00` yields 13:00 UTC.
pub(super) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let prefix = raw
        .get(..TIMESTAMP_PREFIX_LEN)
        .ok_or_else(|| format!("invalid time string: {raw:?}"))?;
    NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|error| format!("{error}: {raw:?}"))
}

/// Parse `"<N> <unit>"` or `"<N> to <M> <unit>"` into `(min, max)`.
///
/// Tokens are split on single spaces, so doubled spaces change the arity.
pub(super) fn parse_wind_speed(raw: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = raw.split(' ').collect();
    match parts.as_slice() {
        [speed, _unit] => {
            let speed = parse_speed(speed, "min")?;
            Ok((speed, speed))
        }
        [min, _, max, _unit] => Ok((parse_speed(min, "min")?, parse_speed(max, "max")?)),
        _ => Err(format!("unexpected format for wind speed string: {raw:?}")),
    }
}

fn parse_speed(token: &str, bound: &str) -> Result<i32, String> {
    token
        .parse::<i32>()
        .map_err(|_| format!("could not convert {bound} speed {token:?} to integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case::range("4 to 8 mph", (4, 8))]
    #[case::single("5 mph", (5, 5))]
    #[case::calm("0 mph", (0, 0))]
    #[case::other_unit("10 to 15 km/h", (10, 15))]
    fn wind_speed_shapes(#[case] raw: &str, #[case] expected: (i32, i32)) {
        assert_eq!(parse_wind_speed(raw), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::bare_number("5")]
    #[case::three_tokens("5 to mph")]
    #[case::five_tokens("4 to 8 mph gusting")]
    #[case::double_space("5  mph")]
    #[case::non_numeric_single("calm mph")]
    #[case::non_numeric_min("four to 8 mph")]
    #[case::non_numeric_max("4 to eight mph")]
    fn wind_speed_rejections(#[case] raw: &str) {
        assert!(parse_wind_speed(raw).is_err(), "{raw:?} should be rejected");
    }

    #[test]
    fn range_error_names_the_bound() {
        let error = parse_wind_speed("4 to x mph").expect_err("max is not numeric");
        assert!(error.contains("max speed"));
    }

    #[rstest]
    #[case::zulu("2022-01-01T13:00:00Z")]
    #[case::negative_offset("2022-01-01T13:00:00-05:00")]
    #[case::positive_offset("2022-01-01T13:00:00+09:30")]
    #[case::bare("2022-01-01T13:00:00")]
    fn offsets_are_discarded(#[case] raw: &str) {
        assert_eq!(parse_timestamp(raw), Ok(utc(2022, 1, 1, 13, 0, 0)));
    }

    #[rstest]
    #[case::empty("")]
    #[case::eighteen_chars("2022-01-01T13:00:0")]
    #[case::date_only("2022-01-01")]
    #[case::wrong_separator("2022-01-01 13:00:00Z")]
    #[case::out_of_range("2022-13-01T13:00:00Z")]
    #[case::garbage("not a timestamp at all")]
    fn malformed_timestamps_fail(#[case] raw: &str) {
        assert!(parse_timestamp(raw).is_err(), "{raw:?} should be rejected");
    }

    #[test]
    fn multibyte_prefix_is_rejected_not_panicking() {
        assert!(parse_timestamp("2022-01-01T13:00:0é").is_err());
    }
}

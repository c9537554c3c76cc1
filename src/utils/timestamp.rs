use crate::error::{Result, SummaryError};
use crate::utils::constants::{CTIME_FORMAT, TIMEZONE_LOCAL, TIMEZONE_UTC};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

/// Zone used when rendering observation timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZonePolicy {
    #[default]
    Utc,
    Local,
}

impl FromStr for TimeZonePolicy {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            TIMEZONE_UTC => Ok(TimeZonePolicy::Utc),
            TIMEZONE_LOCAL => Ok(TimeZonePolicy::Local),
            other => Err(SummaryError::Config(format!(
                "Unknown timezone '{}' (expected '{}' or '{}')",
                other, TIMEZONE_UTC, TIMEZONE_LOCAL
            ))),
        }
    }
}

impl fmt::Display for TimeZonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZonePolicy::Utc => write!(f, "{}", TIMEZONE_UTC),
            TimeZonePolicy::Local => write!(f, "{}", TIMEZONE_LOCAL),
        }
    }
}

/// Observation timestamps are milliseconds; sub-second precision is dropped
fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(millis.div_euclid(1000), 0)
}

/// ctime-style rendering, e.g. `Mon Aug  3 11:00:00 2015`
pub fn format_ctime(millis: i64, zone: TimeZonePolicy) -> String {
    match from_epoch_millis(millis) {
        Some(utc) => match zone {
            TimeZonePolicy::Utc => utc.format(CTIME_FORMAT).to_string(),
            TimeZonePolicy::Local => utc.with_timezone(&Local).format(CTIME_FORMAT).to_string(),
        },
        None => format!("invalid timestamp ({} ms)", millis),
    }
}

/// RFC 3339 rendering for machine-readable output
pub fn format_rfc3339(millis: i64, zone: TimeZonePolicy) -> Option<String> {
    let utc = from_epoch_millis(millis)?;
    Some(match zone {
        TimeZonePolicy::Utc => utc.to_rfc3339_opts(SecondsFormat::Secs, true),
        TimeZonePolicy::Local => utc
            .with_timezone(&Local)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ctime_utc() {
        // 2015-04-06 06:00:00 UTC
        assert_eq!(
            format_ctime(1428300000000, TimeZonePolicy::Utc),
            "Mon Apr  6 06:00:00 2015"
        );
        assert_eq!(format_ctime(0, TimeZonePolicy::Utc), "Thu Jan  1 00:00:00 1970");
    }

    #[test]
    fn test_sub_second_precision_is_dropped() {
        assert_eq!(
            format_ctime(1428300000999, TimeZonePolicy::Utc),
            format_ctime(1428300000000, TimeZonePolicy::Utc)
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert!(format_ctime(i64::MAX, TimeZonePolicy::Utc).starts_with("invalid timestamp"));
        assert_eq!(format_rfc3339(i64::MAX, TimeZonePolicy::Utc), None);
    }

    #[test]
    fn test_format_rfc3339_utc() {
        assert_eq!(
            format_rfc3339(1428300000000, TimeZonePolicy::Utc).unwrap(),
            "2015-04-06T06:00:00Z"
        );
    }

    #[test]
    fn test_timezone_policy_parse() {
        assert_eq!("utc".parse::<TimeZonePolicy>().unwrap(), TimeZonePolicy::Utc);
        assert_eq!("LOCAL".parse::<TimeZonePolicy>().unwrap(), TimeZonePolicy::Local);
        assert!("mars".parse::<TimeZonePolicy>().is_err());
        assert_eq!(TimeZonePolicy::Local.to_string(), "local");
    }
}

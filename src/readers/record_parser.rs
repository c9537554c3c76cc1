//! Line parsing for tab-delimited observation exports.
//!
//! Dirty numeric columns are tolerated: anything that does not parse becomes
//! zero and the line is still kept. Only a short line is dropped.

use crate::models::ObservationRecord;
use crate::utils::constants::{
    EXPECTED_FIELD_COUNT, FIELD_CLOUD_COVER, FIELD_DELIMITER, FIELD_HUMIDITY, FIELD_LIGHTNING,
    FIELD_PRESSURE, FIELD_REGION, FIELD_SNOW, FIELD_TEMPERATURE, FIELD_TIMESTAMP, REGION_CODE_LEN,
};

/// Parse a float, yielding 0.0 for anything unparsable.
///
/// `NaN` and `inf` text counts as unparsable; the extremes in `RegionStats`
/// rely on every folded value being finite.
pub fn parse_f64_or_default(token: &str) -> f64 {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or_default()
}

/// Parse an integer, yielding 0 for anything unparsable.
///
/// Float text such as `1.4283e12` is accepted and truncated toward zero.
pub fn parse_i64_or_default(token: &str) -> i64 {
    let token = token.trim();
    token
        .parse::<i64>()
        .ok()
        .or_else(|| {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| value as i64)
        })
        .unwrap_or_default()
}

/// A flag column is set when its numeric value is non-zero
pub fn parse_flag(token: &str) -> bool {
    parse_f64_or_default(token) != 0.0
}

/// First two characters of the region column
pub fn region_code(token: &str) -> String {
    token.trim().chars().take(REGION_CODE_LEN).collect()
}

/// Parse one line into a record, or `None` when the line is too short.
///
/// Consecutive tabs collapse into one separator.
pub fn parse_line(line: &str) -> Option<ObservationRecord> {
    let line = line.trim_end_matches(['\r', '\n']);

    let mut fields: [&str; EXPECTED_FIELD_COUNT] = [""; EXPECTED_FIELD_COUNT];
    let mut count = 0;
    for token in line
        .split(FIELD_DELIMITER)
        .filter(|token| !token.is_empty())
        .take(EXPECTED_FIELD_COUNT)
    {
        fields[count] = token;
        count += 1;
    }

    if count < EXPECTED_FIELD_COUNT {
        return None;
    }

    Some(ObservationRecord {
        region: region_code(fields[FIELD_REGION]),
        timestamp: parse_i64_or_default(fields[FIELD_TIMESTAMP]),
        humidity: parse_f64_or_default(fields[FIELD_HUMIDITY]),
        snow: parse_flag(fields[FIELD_SNOW]),
        cloud_cover: parse_f64_or_default(fields[FIELD_CLOUD_COVER]),
        lightning: parse_flag(fields[FIELD_LIGHTNING]),
        pressure: parse_f64_or_default(fields[FIELD_PRESSURE]),
        temperature_k: parse_f64_or_default(fields[FIELD_TEMPERATURE]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "CA\t1428300000000\t9prcjqk3yc80\t93.0\t0.0\t100.0\t0.0\t95644.0\t277.58716";

    #[test]
    fn test_parse_sample_line() {
        let record = parse_line(SAMPLE).unwrap();

        assert_eq!(record.region, "CA");
        assert_eq!(record.timestamp, 1428300000000);
        assert_eq!(record.humidity, 93.0);
        assert!(!record.snow);
        assert_eq!(record.cloud_cover, 100.0);
        assert!(!record.lightning);
        assert_eq!(record.pressure, 95644.0);
        assert_eq!(record.temperature_k, 277.58716);
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        let with_newline = format!("{}\r\n", SAMPLE);
        assert_eq!(parse_line(&with_newline), parse_line(SAMPLE));
    }

    #[test]
    fn test_short_lines_are_dropped() {
        assert!(parse_line("").is_none());
        assert!(parse_line("CA\t1428300000000\tgeo").is_none());
        assert!(parse_line("CA\t1\tgeo\t93.0\t0.0\t100.0\t0.0").is_none());
        assert!(parse_line("CA\t1\tgeo\t93.0\t0.0\t100.0\t0.0\t95644.0").is_none());
        assert!(parse_line("CA 1 geo 93.0 0.0 100.0 0.0 95644.0 277.5").is_none());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let line = format!("{}\textra\tcolumns", SAMPLE);
        assert_eq!(parse_line(&line), parse_line(SAMPLE));
    }

    #[test]
    fn test_consecutive_tabs_collapse() {
        let line = SAMPLE.replace('\t', "\t\t");
        assert_eq!(parse_line(&line), parse_line(SAMPLE));
    }

    #[test]
    fn test_long_region_codes_are_truncated() {
        let line = SAMPLE.replacen("CA", "CALIFORNIA", 1);
        assert_eq!(parse_line(&line).unwrap().region, "CA");

        let line = SAMPLE.replacen("CA", "C", 1);
        assert_eq!(parse_line(&line).unwrap().region, "C");
    }

    #[test]
    fn test_garbage_numbers_become_zero() {
        let line = "TN\tnot-a-time\tgeo\thumid\tyes\t??\tno\tn/a\tcold";
        let record = parse_line(line).unwrap();

        assert_eq!(record.region, "TN");
        assert_eq!(record.timestamp, 0);
        assert_eq!(record.humidity, 0.0);
        assert!(!record.snow);
        assert_eq!(record.cloud_cover, 0.0);
        assert!(!record.lightning);
        assert_eq!(record.pressure, 0.0);
        assert_eq!(record.temperature_k, 0.0);
    }

    #[test]
    fn test_parse_or_default_helpers() {
        assert_eq!(parse_f64_or_default(" 93.5 "), 93.5);
        assert_eq!(parse_f64_or_default("abc"), 0.0);
        assert_eq!(parse_f64_or_default(""), 0.0);

        assert_eq!(parse_i64_or_default("1428300000000"), 1428300000000);
        assert_eq!(parse_i64_or_default("1.4283e12"), 1428300000000);
        assert_eq!(parse_i64_or_default("-12.9"), -12);
        assert_eq!(parse_i64_or_default("NaN"), 0);
        assert_eq!(parse_i64_or_default("x"), 0);

        assert!(parse_flag("1.0"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("0.0"));
        assert!(!parse_flag("junk"));
    }

    #[test]
    fn test_non_finite_numbers_become_zero() {
        assert_eq!(parse_f64_or_default("NaN"), 0.0);
        assert_eq!(parse_f64_or_default("nan"), 0.0);
        assert_eq!(parse_f64_or_default("inf"), 0.0);
        assert_eq!(parse_f64_or_default("-inf"), 0.0);
        assert_eq!(parse_f64_or_default("infinity"), 0.0);
        assert!(!parse_flag("NaN"));

        let line = "CA\t1\tgeo\tinf\t0.0\t-inf\t0.0\tNaN\tnan";
        let record = parse_line(line).unwrap();
        assert_eq!(record.humidity, 0.0);
        assert_eq!(record.cloud_cover, 0.0);
        assert_eq!(record.pressure, 0.0);
        assert_eq!(record.temperature_k, 0.0);
    }

    #[test]
    fn test_flags_are_read() {
        let line = "WA\t1\tgeo\t50.0\t1.0\t20.0\t1.0\t100000.0\t260.0";
        let record = parse_line(line).unwrap();

        assert!(record.snow);
        assert!(record.lightning);
    }
}

/// Column positions in a NOAA tab-delimited observation line.
/// Column 2 holds a geohash, which the summary never reads.
pub const FIELD_REGION: usize = 0;
pub const FIELD_TIMESTAMP: usize = 1;
pub const FIELD_HUMIDITY: usize = 3;
pub const FIELD_SNOW: usize = 4;
pub const FIELD_CLOUD_COVER: usize = 5;
pub const FIELD_LIGHTNING: usize = 6;
pub const FIELD_PRESSURE: usize = 7;
pub const FIELD_TEMPERATURE: usize = 8;

/// Lines with fewer tokens than this are dropped
pub const EXPECTED_FIELD_COUNT: usize = FIELD_TEMPERATURE + 1;

pub const FIELD_DELIMITER: char = '\t';

/// Region codes are truncated to this many characters
pub const REGION_CODE_LEN: usize = 2;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Report formats
pub const FORMAT_TEXT: &str = "text";
pub const FORMAT_JSON: &str = "json";

/// Timestamp zones
pub const TIMEZONE_UTC: &str = "utc";
pub const TIMEZONE_LOCAL: &str = "local";

/// ctime(3) layout, e.g. "Mon Aug  3 11:00:00 2015"
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub const REPORT_SEPARATOR: &str = "---------------------------";

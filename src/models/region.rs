use crate::models::ObservationRecord;

/// Running statistics for one region code
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    pub code: String,
    pub record_count: u64,
    pub humidity_sum: f64,
    pub cloud_cover_sum: f64,
    pub temperature_sum_f: f64,
    pub max_temp_f: f64,
    pub max_temp_timestamp: i64,
    pub min_temp_f: f64,
    pub min_temp_timestamp: i64,
    pub lightning_strikes: u64,
    pub snow_cover_records: u64,
}

impl RegionStats {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            record_count: 0,
            humidity_sum: 0.0,
            cloud_cover_sum: 0.0,
            temperature_sum_f: 0.0,
            max_temp_f: f64::NEG_INFINITY,
            max_temp_timestamp: 0,
            min_temp_f: f64::INFINITY,
            min_temp_timestamp: 0,
            lightning_strikes: 0,
            snow_cover_records: 0,
        }
    }

    /// Fold one observation into the running totals.
    ///
    /// Extremes only move on a strict improvement, so the earliest record
    /// holding a tied value keeps its timestamp.
    pub fn fold(&mut self, record: &ObservationRecord) {
        let temperature_f = record.temperature_f();

        self.record_count += 1;
        self.humidity_sum += record.humidity;
        self.cloud_cover_sum += record.cloud_cover;
        self.temperature_sum_f += temperature_f;

        if temperature_f > self.max_temp_f {
            self.max_temp_f = temperature_f;
            self.max_temp_timestamp = record.timestamp;
        }

        if temperature_f < self.min_temp_f {
            self.min_temp_f = temperature_f;
            self.min_temp_timestamp = record.timestamp;
        }

        self.lightning_strikes += u64::from(record.lightning);
        self.snow_cover_records += u64::from(record.snow);
    }

    pub fn has_records(&self) -> bool {
        self.record_count > 0
    }

    pub fn average_humidity(&self) -> Option<f64> {
        self.average(self.humidity_sum)
    }

    pub fn average_temperature_f(&self) -> Option<f64> {
        self.average(self.temperature_sum_f)
    }

    pub fn average_cloud_cover(&self) -> Option<f64> {
        self.average(self.cloud_cover_sum)
    }

    /// Highest temperature seen and the timestamp (ms) of the record that set it
    pub fn max_temperature(&self) -> Option<(f64, i64)> {
        self.has_records()
            .then_some((self.max_temp_f, self.max_temp_timestamp))
    }

    /// Lowest temperature seen and the timestamp (ms) of the record that set it
    pub fn min_temperature(&self) -> Option<(f64, i64)> {
        self.has_records()
            .then_some((self.min_temp_f, self.min_temp_timestamp))
    }

    fn average(&self, sum: f64) -> Option<f64> {
        if self.record_count == 0 {
            None
        } else {
            Some(sum / self.record_count as f64)
        }
    }
}

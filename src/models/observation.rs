use serde::{Deserialize, Serialize};

/// Convert a surface temperature from Kelvin to Fahrenheit
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 1.8 - 459.67
}

/// One observation line from a NOAA tab-delimited export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub region: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub humidity: f64,
    pub snow: bool,
    pub cloud_cover: f64,
    pub lightning: bool,
    /// Pascals; carried through but not aggregated
    pub pressure: f64,
    pub temperature_k: f64,
}

impl ObservationRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        region: impl Into<String>,
        timestamp: i64,
        humidity: f64,
        snow: bool,
        cloud_cover: f64,
        lightning: bool,
        pressure: f64,
        temperature_k: f64,
    ) -> Self {
        Self {
            region: region.into(),
            timestamp,
            humidity,
            snow,
            cloud_cover,
            lightning,
            pressure,
            temperature_k,
        }
    }

    pub fn temperature_f(&self) -> f64 {
        kelvin_to_fahrenheit(self.temperature_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_to_fahrenheit() {
        assert!((kelvin_to_fahrenheit(273.15) - 32.0).abs() < 1e-9);
        assert!((kelvin_to_fahrenheit(373.15) - 212.0).abs() < 1e-9);
        assert_eq!(kelvin_to_fahrenheit(0.0), -459.67);
    }

    #[test]
    fn test_record_temperature_f() {
        let record = ObservationRecord::new("CA", 0, 50.0, false, 0.0, false, 101325.0, 277.58716);
        let expected = 277.58716 * 1.8 - 459.67;
        assert!((record.temperature_f() - expected).abs() < 1e-9);
    }
}

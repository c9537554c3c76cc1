use crate::error::{Result, SummaryError};
use crate::models::RegionStats;
use crate::utils::constants::{FORMAT_JSON, FORMAT_TEXT, REPORT_SEPARATOR};
use crate::utils::timestamp::{format_ctime, format_rfc3339, TimeZonePolicy};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable view of one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub code: String,
    pub record_count: u64,
    pub average_humidity: Option<f64>,
    pub average_temperature_f: Option<f64>,
    pub max_temperature_f: Option<f64>,
    pub max_temperature_at: Option<String>,
    pub min_temperature_f: Option<f64>,
    pub min_temperature_at: Option<String>,
    pub lightning_strikes: u64,
    pub snow_cover_records: u64,
    pub average_cloud_cover: Option<f64>,
}

impl RegionSummary {
    pub fn from_stats(stats: &RegionStats, zone: TimeZonePolicy) -> Self {
        let max = stats.max_temperature();
        let min = stats.min_temperature();

        Self {
            code: stats.code.clone(),
            record_count: stats.record_count,
            average_humidity: stats.average_humidity(),
            average_temperature_f: stats.average_temperature_f(),
            max_temperature_f: max.map(|(temp, _)| temp),
            max_temperature_at: max.and_then(|(_, at)| format_rfc3339(at, zone)),
            min_temperature_f: min.map(|(temp, _)| temp),
            min_temperature_at: min.and_then(|(_, at)| format_rfc3339(at, zone)),
            lightning_strikes: stats.lightning_strikes,
            snow_cover_records: stats.snow_cover_records,
            average_cloud_cover: stats.average_cloud_cover(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub regions_found: Vec<String>,
    pub regions: Vec<RegionSummary>,
}

pub struct ReportWriter {
    format: ReportFormat,
    zone: TimeZonePolicy,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            format: ReportFormat::Text,
            zone: TimeZonePolicy::Utc,
        }
    }

    pub fn with_format(mut self, format: &str) -> Result<Self> {
        self.format = match format.to_lowercase().as_str() {
            FORMAT_TEXT => ReportFormat::Text,
            FORMAT_JSON => ReportFormat::Json,
            _ => {
                return Err(SummaryError::Config(format!(
                    "Unknown report format '{}' (expected '{}' or '{}')",
                    format, FORMAT_TEXT, FORMAT_JSON
                )))
            }
        };
        Ok(self)
    }

    pub fn with_timezone(mut self, zone: &str) -> Result<Self> {
        self.zone = zone.parse()?;
        Ok(self)
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn timezone(&self) -> TimeZonePolicy {
        self.zone
    }

    /// Render the report for `regions` into a string
    pub fn render(&self, regions: &[RegionStats]) -> Result<String> {
        let mut buf = Vec::new();
        self.write(regions, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the report for `regions`, in the order given
    pub fn write<W: Write>(&self, regions: &[RegionStats], out: &mut W) -> Result<()> {
        match self.format {
            ReportFormat::Text => self.write_text(regions, out),
            ReportFormat::Json => self.write_json(regions, out),
        }
    }

    fn write_text<W: Write>(&self, regions: &[RegionStats], out: &mut W) -> Result<()> {
        write!(out, "States found:")?;
        if regions.is_empty() {
            writeln!(out, " None")?;
        } else {
            for region in regions {
                write!(out, " {}", region.code)?;
            }
            writeln!(out)?;
        }

        for region in regions {
            writeln!(out, "-- State: {} --", region.code)?;
            writeln!(out, "Number of Records: {}", region.record_count)?;
            writeln!(
                out,
                "Average Humidity: {}",
                percent(region.average_humidity())
            )?;
            writeln!(
                out,
                "Average Temperature: {}",
                fahrenheit(region.average_temperature_f())
            )?;

            let max = region.max_temperature();
            writeln!(out, "Max Temperature: {}", fahrenheit(max.map(|(t, _)| t)))?;
            writeln!(out, "Max Temperature on: {}", self.when(max))?;

            let min = region.min_temperature();
            writeln!(out, "Min Temperature: {}", fahrenheit(min.map(|(t, _)| t)))?;
            writeln!(out, "Min Temperature on: {}", self.when(min))?;

            writeln!(out, "Lightning Strikes: {}", region.lightning_strikes)?;
            writeln!(out, "Records with Snow Cover: {}", region.snow_cover_records)?;
            writeln!(
                out,
                "Average Cloud Cover: {}",
                percent(region.average_cloud_cover())
            )?;
            writeln!(out, "{}", REPORT_SEPARATOR)?;
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, regions: &[RegionStats], out: &mut W) -> Result<()> {
        let report = JsonReport {
            regions_found: regions.iter().map(|r| r.code.clone()).collect(),
            regions: regions
                .iter()
                .map(|r| RegionSummary::from_stats(r, self.zone))
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }

    fn when(&self, extremum: Option<(f64, i64)>) -> String {
        extremum
            .map(|(_, at)| format_ctime(at, self.zone))
            .unwrap_or_else(|| "n/a".to_string())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}%", v))
}

fn fahrenheit(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}°F", v))
}

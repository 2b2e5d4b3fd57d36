//! Missing-data diagnostics.
//!
//! The crate ships a precomputed report of missing hours per year and
//! sensor; this module reshapes it into a flat summary table. Nothing is
//! recomputed from the hourly data here.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Embedded precomputed missing-data report, keyed by 4-digit year.
pub static REPORT_JSON: &str = include_str!("../fixtures/missing_data_report.json");

/// Per-year entry in the bundled report.
#[derive(Debug, Deserialize)]
struct YearReport {
    /// Number of hourly rows recorded for the year.
    rows: u32,
    /// Sensors active in the year; pre-2022 years omit the sensors in
    /// [`SENSORS_ADDED_2022`](crate::catalog::SENSORS_ADDED_2022).
    sensor_names: Vec<String>,
    /// Missing-hour counts; sensors with no missing hours are absent.
    per_sensor: HashMap<String, u32>,
}

/// Missing-data summary for one (year, sensor) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    pub year: i32,
    pub sensor: String,
    pub total_hours: u32,
    pub missing_hours: u32,
    /// Percentage of the year's hours with no recording, rounded to
    /// 2 decimal places.
    pub pct_missing: f64,
}

/// Percentage of missing hours, rounded to 2 decimal places.
///
/// A zero total is an explicit error rather than a silent NaN or
/// infinity.
fn percent_missing(missing_hours: u32, total_hours: u32, year: i32) -> Result<f64, DataError> {
    if total_hours == 0 {
        return Err(DataError::ZeroTotalHours(year));
    }
    let pct = 100.0 * f64::from(missing_hours) / f64::from(total_hours);
    Ok((pct * 100.0).round() / 100.0)
}

/// Summarize missing data by year and sensor.
///
/// Returns one row per (year, sensor active in that year), years
/// ascending. Sensors absent from a year's `per_sensor` mapping had no
/// missing hours that year.
pub fn describe_missing() -> anyhow::Result<Vec<MissingSummary>> {
    let report: BTreeMap<String, YearReport> = serde_json::from_str(REPORT_JSON)?;

    let mut summaries = Vec::new();
    for (year_str, info) in &report {
        let year: i32 = year_str.parse()?;
        for sensor in &info.sensor_names {
            let missing_hours = info.per_sensor.get(sensor).copied().unwrap_or(0);
            let pct_missing = percent_missing(missing_hours, info.rows, year)?;
            summaries.push(MissingSummary {
                year,
                sensor: sensor.clone(),
                total_hours: info.rows,
                missing_hours,
                pct_missing,
            });
        }
    }
    log::debug!(
        "loader: describe_missing produced {} rows",
        summaries.len()
    );
    Ok(summaries)
}

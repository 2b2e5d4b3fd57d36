//! Loading and filtering of the raw hourly counts table.

use crate::error::DataError;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV data for all hourly pedestrian counts (2019-2025).
pub static HOURLY_CSV: &str = include_str!("../fixtures/hourly_counts.csv");

/// Date format used in the hourly counts CSV: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The non-sensor columns, in table order. Every column after these is
/// a sensor column.
pub const KEY_COLUMNS: [&str; 3] = ["date", "hour", "year"];

/// One row of hourly counts: a (date, hour) pair plus one count per
/// sensor column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRow {
    pub date: NaiveDate,
    /// Hour-of-day label, e.g. "08:00".
    pub hour: String,
    /// Redundant with `date`, stored for fast year filtering.
    pub year: i32,
    /// One entry per sensor, parallel to [`HourlyTable::sensors`].
    /// `None` marks an hour with no recording (sensor outage), which is
    /// distinct from a recorded count of zero.
    pub counts: Vec<Option<f64>>,
}

/// Hourly counts in column order: `date`, `hour`, `year`, then one
/// numeric column per sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyTable {
    pub sensors: Vec<String>,
    pub rows: Vec<HourlyRow>,
}

impl HourlyTable {
    /// Index of a sensor column by exact name.
    pub fn sensor_index(&self, name: &str) -> Option<usize> {
        self.sensors.iter().position(|s| s == name)
    }

    /// Project the table down to the given sensor columns, keeping
    /// `date`/`hour`/`year` and the requested sensors in request order.
    pub fn select(&self, sensors: &[&str]) -> Result<HourlyTable, DataError> {
        let mut indices = Vec::with_capacity(sensors.len());
        for name in sensors {
            match self.sensor_index(name) {
                Some(ix) => indices.push(ix),
                None => return Err(DataError::UnknownSensor((*name).to_string())),
            }
        }
        let rows = self
            .rows
            .iter()
            .map(|row| HourlyRow {
                date: row.date,
                hour: row.hour.clone(),
                year: row.year,
                counts: indices.iter().map(|&ix| row.counts[ix]).collect(),
            })
            .collect();
        Ok(HourlyTable {
            sensors: sensors.iter().map(|s| s.to_string()).collect(),
            rows,
        })
    }

    /// Drop rows that have a missing value in any sensor column.
    /// The key columns are never considered.
    pub fn drop_missing(&mut self) {
        self.rows
            .retain(|row| row.counts.iter().all(|c| c.is_some()));
    }
}

/// Parse a CSV string in the hourly-counts format into an [`HourlyTable`].
///
/// Expected header: `date,hour,year,<sensor name>,...`. Empty cells in
/// sensor columns mark missing hours.
pub fn parse_hourly_csv(csv_object: &str) -> anyhow::Result<HourlyTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    let headers = rdr.headers()?.clone();
    let sensors: Vec<String> = headers
        .iter()
        .skip(KEY_COLUMNS.len())
        .map(String::from)
        .collect();

    let mut rows = Vec::with_capacity(1024);
    for result in rdr.records() {
        let record = result?;
        let date = NaiveDate::parse_from_str(record.get(0).unwrap_or(""), DATE_FORMAT)?;
        let hour = record.get(1).unwrap_or("").to_string();
        let year: i32 = record.get(2).unwrap_or("").trim().parse()?;
        let mut counts = Vec::with_capacity(sensors.len());
        for field in record.iter().skip(KEY_COLUMNS.len()) {
            let field = field.trim();
            if field.is_empty() {
                counts.push(None);
            } else {
                counts.push(Some(field.parse::<f64>()?));
            }
        }
        rows.push(HourlyRow {
            date,
            hour,
            year,
            counts,
        });
    }
    Ok(HourlyTable { sensors, rows })
}

/// Load hourly pedestrian counts.
///
/// * `years` — filter to specific years (e.g. `&[2022, 2023]`).
///   `None` loads all years (2019-2025). A year with no data yields an
///   empty result, not an error.
/// * `sensors` — filter to specific sensor locations; see
///   [`list_sensors`](crate::catalog::list_sensors) for available
///   names. A name that is not a column fails with
///   [`DataError::UnknownSensor`].
/// * `dropna` — if true, drop rows with a missing value in any sensor
///   column. Applied last, so only columns that survived the `sensors`
///   projection are considered.
///
/// Each call re-parses the embedded CSV and returns a fresh table.
pub fn load_hourly(
    years: Option<&[i32]>,
    sensors: Option<&[&str]>,
    dropna: bool,
) -> anyhow::Result<HourlyTable> {
    let mut table = parse_hourly_csv(HOURLY_CSV)?;

    if let Some(years) = years {
        table.rows.retain(|row| years.contains(&row.year));
    }

    if let Some(sensors) = sensors {
        table = table.select(sensors)?;
    }

    if dropna {
        table.drop_missing();
    }

    log::debug!(
        "loader: load_hourly returned {} rows x {} sensors",
        table.rows.len(),
        table.sensors.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::{load_hourly, parse_hourly_csv};
    use crate::error::DataError;
    use chrono::NaiveDate;

    const STR_COUNTS: &str = "\
date,hour,year,45 Queen Street,2 High Street
2023-03-01,00:00,2023,12,7
2023-03-01,01:00,2023,,5
2023-03-01,02:00,2023,31,
";

    #[test]
    fn test_parse_hourly_csv() {
        let table = parse_hourly_csv(STR_COUNTS).unwrap();
        assert_eq!(table.sensors, vec!["45 Queen Street", "2 High Street"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[0].date,
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
        assert_eq!(table.rows[0].hour, "00:00");
        assert_eq!(table.rows[0].year, 2023);
        assert_eq!(table.rows[0].counts, vec![Some(12.0), Some(7.0)]);
        // empty cell is a missing hour, not zero
        assert_eq!(table.rows[1].counts, vec![None, Some(5.0)]);
    }

    #[test]
    fn test_select_keeps_request_order() {
        let table = parse_hourly_csv(STR_COUNTS).unwrap();
        let projected = table.select(&["2 High Street"]).unwrap();
        assert_eq!(projected.sensors, vec!["2 High Street"]);
        assert_eq!(projected.rows[0].counts, vec![Some(7.0)]);
        assert_eq!(projected.rows[2].counts, vec![None]);
    }

    #[test]
    fn test_select_unknown_sensor() {
        let table = parse_hourly_csv(STR_COUNTS).unwrap();
        let err = table.select(&["4 Nowhere Lane"]).unwrap_err();
        assert_eq!(err, DataError::UnknownSensor("4 Nowhere Lane".to_string()));
    }

    #[test]
    fn test_drop_missing_only_looks_at_sensor_columns() {
        let mut table = parse_hourly_csv(STR_COUNTS).unwrap();
        table.drop_missing();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].hour, "00:00");
    }

    #[test]
    fn test_dropna_after_projection() {
        // hour 02:00 is missing only for "2 High Street"; once the table
        // is projected to "45 Queen Street" that row must survive dropna
        let table = parse_hourly_csv(STR_COUNTS).unwrap();
        let mut projected = table.select(&["45 Queen Street"]).unwrap();
        projected.drop_missing();
        assert_eq!(projected.rows.len(), 2);
    }

    #[test]
    fn test_load_hourly_year_filter() {
        let table = load_hourly(Some(&[2023]), None, false).unwrap();
        assert_eq!(table.rows.len(), 8760);
        assert!(table.rows.iter().all(|row| row.year == 2023));

        // leap year
        let table = load_hourly(Some(&[2020]), None, false).unwrap();
        assert_eq!(table.rows.len(), 8784);
    }

    #[test]
    fn test_load_hourly_unknown_year_is_empty() {
        let table = load_hourly(Some(&[1999]), None, false).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_load_hourly_full_catalog() {
        let table = load_hourly(None, None, false).unwrap();
        assert_eq!(table.sensors, crate::catalog::list_sensors());
    }

    #[test]
    fn test_load_hourly_unknown_sensor_propagates() {
        let err = load_hourly(None, Some(&["4 Nowhere Lane"]), false).unwrap_err();
        let data_err = err.downcast_ref::<DataError>().unwrap();
        assert_eq!(
            *data_err,
            DataError::UnknownSensor("4 Nowhere Lane".to_string())
        );
    }

    #[test]
    fn test_sensors_added_2022_empty_before_2022() {
        let table = load_hourly(
            Some(&[2021]),
            Some(&["188 Quay Street Lower Albert (EW)"]),
            false,
        )
        .unwrap();
        assert_eq!(table.rows.len(), 8760);
        assert!(table.rows.iter().all(|row| row.counts[0].is_none()));
    }
}

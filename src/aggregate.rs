//! Daily and monthly aggregation of the hourly counts.
//!
//! A period's total for a sensor is the sum of the non-missing hourly
//! values in that period. A period where every hourly value is missing
//! totals to missing, not zero; "sum of no values" and "sum of zero
//! values" are kept distinct.

use crate::hourly::{load_hourly, HourlyTable};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily totals for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub year: i32,
    /// One total per sensor, parallel to [`DailyTable::sensors`].
    /// `None` when every hourly value that day was missing.
    pub totals: Vec<Option<f64>>,
}

/// Daily totals, one row per (date, year), ordered chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTable {
    pub sensors: Vec<String>,
    pub rows: Vec<DailyRow>,
}

/// Monthly totals for one (year, month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// One total per sensor, parallel to [`MonthlyTable::sensors`].
    /// `None` when every hourly value that month was missing.
    pub totals: Vec<Option<f64>>,
}

/// Monthly totals, one row per (year, month), ordered chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTable {
    pub sensors: Vec<String>,
    pub rows: Vec<MonthlyRow>,
}

/// Add the non-missing entries of `counts` into `acc`. A slot that never
/// receives a value stays `None`.
fn sum_into(acc: &mut [Option<f64>], counts: &[Option<f64>]) {
    for (slot, value) in acc.iter_mut().zip(counts) {
        if let Some(v) = value {
            *slot = Some(slot.unwrap_or(0.0) + v);
        }
    }
}

fn aggregate_daily(hourly: &HourlyTable, dropna: bool) -> DailyTable {
    let mut groups: BTreeMap<(NaiveDate, i32), Vec<Option<f64>>> = BTreeMap::new();
    for row in &hourly.rows {
        let acc = groups
            .entry((row.date, row.year))
            .or_insert_with(|| vec![None; hourly.sensors.len()]);
        sum_into(acc, &row.counts);
    }
    let mut rows: Vec<DailyRow> = groups
        .into_iter()
        .map(|((date, year), totals)| DailyRow { date, year, totals })
        .collect();
    if dropna {
        rows.retain(|row| row.totals.iter().all(|t| t.is_some()));
    }
    DailyTable {
        sensors: hourly.sensors.clone(),
        rows,
    }
}

fn aggregate_monthly(hourly: &HourlyTable, dropna: bool) -> MonthlyTable {
    let mut groups: BTreeMap<(i32, u32), Vec<Option<f64>>> = BTreeMap::new();
    for row in &hourly.rows {
        let acc = groups
            .entry((row.year, row.date.month()))
            .or_insert_with(|| vec![None; hourly.sensors.len()]);
        sum_into(acc, &row.counts);
    }
    let mut rows: Vec<MonthlyRow> = groups
        .into_iter()
        .map(|((year, month), totals)| MonthlyRow {
            year,
            month,
            totals,
        })
        .collect();
    if dropna {
        rows.retain(|row| row.totals.iter().all(|t| t.is_some()));
    }
    MonthlyTable {
        sensors: hourly.sensors.clone(),
        rows,
    }
}

/// Load daily pedestrian totals, aggregated from the hourly data.
///
/// `years` and `sensors` filter exactly as in
/// [`load_hourly`](crate::hourly::load_hourly). `dropna` drops
/// **aggregated** rows with a missing total in any sensor column; a day
/// with some missing hours but at least one recording still gets a
/// total and survives.
pub fn load_daily(
    years: Option<&[i32]>,
    sensors: Option<&[&str]>,
    dropna: bool,
) -> anyhow::Result<DailyTable> {
    let hourly = load_hourly(years, sensors, false)?;
    let daily = aggregate_daily(&hourly, dropna);
    log::debug!("loader: load_daily returned {} rows", daily.rows.len());
    Ok(daily)
}

/// Load monthly pedestrian totals, aggregated from the hourly data.
///
/// Rows are ordered by (year, month) ascending. `dropna` behaves as in
/// [`load_daily`].
pub fn load_monthly(
    years: Option<&[i32]>,
    sensors: Option<&[&str]>,
    dropna: bool,
) -> anyhow::Result<MonthlyTable> {
    let hourly = load_hourly(years, sensors, false)?;
    let monthly = aggregate_monthly(&hourly, dropna);
    log::debug!("loader: load_monthly returned {} rows", monthly.rows.len());
    Ok(monthly)
}

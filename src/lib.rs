//! Hourly pedestrian counts for Auckland city centre.
//!
//! Bundles pedestrian count data from Heart of the City Auckland's
//! monitoring system, covering 21 sensor locations across the CBD
//! (2019-2025), and exposes loaders that filter and aggregate it into
//! typed tables.
//!
//! Quick start:
//!
//! ```
//! use akl_ped_counts::{load_hourly, load_locations};
//!
//! let counts = load_hourly(None, None, false).unwrap();
//! let locations = load_locations().unwrap();
//! assert_eq!(counts.sensors.len(), locations.len());
//! ```
//!
//! Data source: Heart of the City Auckland
//! <https://www.hotcity.co.nz/pedestrian-counts>, licensed under CC BY 4.0.

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod hourly;
pub mod locations;
pub mod missing;

pub use aggregate::{load_daily, load_monthly, DailyRow, DailyTable, MonthlyRow, MonthlyTable};
pub use catalog::{list_sensors, SENSORS, SENSORS_ADDED_2022};
pub use error::DataError;
pub use hourly::{load_hourly, HourlyRow, HourlyTable};
pub use locations::{load_locations, Location};
pub use missing::{describe_missing, MissingSummary};

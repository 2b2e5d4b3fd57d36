//! The fixed catalog of pedestrian sensor locations.

/// Canonical list of all 21 sensor locations, in geographic order
/// (north to south). These names are the column keys used across every
/// table in the crate.
pub static SENSORS: [&str; 21] = [
    "107 Quay Street",
    "188 Quay Street Lower Albert (EW)",
    "188 Quay Street Lower Albert (NS)",
    "Te Ara Tahuhu Walkway",
    "Commerce Street West",
    "7 Custom Street East",
    "45 Queen Street",
    "30 Queen Street",
    "19 Shortland Street",
    "2 High Street",
    "1 Courthouse Lane",
    "61 Federal Street",
    "59 High Street",
    "210 Queen Street",
    "205 Queen Street",
    "8 Darby Street EW",
    "8 Darby Street NS",
    "261 Queen Street",
    "297 Queen Street",
    "150 K Road",
    "183 K Road",
];

/// Sensors added in 2022. Rows for 2019-2021 carry no values for these
/// columns (entirely missing, not zero).
pub static SENSORS_ADDED_2022: [&str; 2] = [
    "188 Quay Street Lower Albert (EW)",
    "188 Quay Street Lower Albert (NS)",
];

/// Return an owned copy of the canonical sensor list.
///
/// The returned vector is the caller's to mutate; the catalog itself
/// stays fixed.
pub fn list_sensors() -> Vec<String> {
    SENSORS.iter().map(|s| s.to_string()).collect()
}

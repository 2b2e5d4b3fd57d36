//! Sensor location metadata.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV of sensor location metadata.
pub static LOCATIONS_CSV: &str = include_str!("../fixtures/locations.csv");

/// Metadata for one pedestrian sensor location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Street address; joins to the sensor catalog by exact string match.
    pub address: String,
    /// Latitude in WGS 84 decimal degrees
    pub latitude: f64,
    /// Longitude in WGS 84 decimal degrees
    pub longitude: f64,
}

/// Parse a CSV string of location metadata.
///
/// Expected CSV columns (with headers): `Address,Latitude,Longitude`
pub fn parse_locations_csv(csv_object: &str) -> anyhow::Result<Vec<Location>> {
    let mut locations = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let record = row?;
        let address = String::from(record.get(0).unwrap_or("").trim());
        let latitude: f64 = record.get(1).unwrap_or("").trim().parse()?;
        let longitude: f64 = record.get(2).unwrap_or("").trim().parse()?;
        locations.push(Location {
            address,
            latitude,
            longitude,
        });
    }
    Ok(locations)
}

/// Load sensor location metadata (address, latitude, longitude) for all
/// 21 sensors.
pub fn load_locations() -> anyhow::Result<Vec<Location>> {
    let locations = parse_locations_csv(LOCATIONS_CSV)?;
    log::debug!("loader: loaded {} sensor locations", locations.len());
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::{load_locations, parse_locations_csv};
    use crate::catalog::SENSORS;
    use std::collections::HashSet;

    #[test]
    fn test_parse_locations_csv() {
        let csv_data = "\
Address,Latitude,Longitude
45 Queen Street,-36.84556,174.76594
150 K Road,-36.85776,174.76115
";
        let locations = parse_locations_csv(csv_data).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].address, "45 Queen Street");
        assert!((locations[0].latitude - (-36.84556)).abs() < f64::EPSILON);
        assert!((locations[1].longitude - 174.76115).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_locations_matches_catalog() {
        let locations = load_locations().unwrap();
        assert_eq!(locations.len(), 21);
        let addresses: HashSet<&str> = locations.iter().map(|l| l.address.as_str()).collect();
        let catalog: HashSet<&str> = SENSORS.iter().copied().collect();
        assert_eq!(addresses, catalog);
    }

    #[test]
    fn test_coordinates_are_in_auckland() {
        for location in load_locations().unwrap() {
            assert!(location.latitude > -37.0 && location.latitude < -36.0);
            assert!(location.longitude > 174.0 && location.longitude < 175.0);
        }
    }
}

//! Address and coordinate domain models
//!
//! Upstream directories are loose about coordinate types: some send decimal
//! strings ("lat": "-37.3159"), some send numbers. `Coordinate` accepts both
//! and defers coercion until a distance is actually needed.

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A latitude or longitude as delivered by the upstream source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Coerce to decimal degrees
    ///
    /// A non-numeric string is a fatal `InvalidCoordinate` error, not a
    /// record-level skip: a record that claims to have coordinates but
    /// carries garbage is distinct from one that has none at all.
    pub fn degrees(&self) -> Result<f64> {
        match self {
            Coordinate::Number(n) => Ok(*n),
            Coordinate::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                Error::invalid_coordinate(format!("{:?} is not a decimal number", s))
            }),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Coordinate::Number(value)
    }
}

/// Geographic position of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: Coordinate,
    pub lng: Coordinate,
}

impl Geo {
    pub fn new(lat: impl Into<Coordinate>, lng: impl Into<Coordinate>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Coerce both axes to decimal degrees
    pub fn resolved(&self) -> Result<(f64, f64)> {
        Ok((self.lat.degrees()?, self.lng.degrees()?))
    }
}

/// Postal address; only the geo part matters to the pipeline, and even that
/// is optional upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub geo: Option<Geo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_from_number() {
        let coord = Coordinate::Number(52.237049);
        assert_eq!(coord.degrees().unwrap(), 52.237049);
    }

    #[test]
    fn test_coordinate_from_decimal_string() {
        let coord = Coordinate::Text("-37.3159".to_string());
        assert_eq!(coord.degrees().unwrap(), -37.3159);
    }

    #[test]
    fn test_coordinate_trims_whitespace() {
        let coord = Coordinate::Text(" 19.944544 ".to_string());
        assert_eq!(coord.degrees().unwrap(), 19.944544);
    }

    #[test]
    fn test_non_numeric_coordinate_is_fatal() {
        let coord = Coordinate::Text("north-ish".to_string());
        let err = coord.degrees().unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate(_)));
    }

    #[test]
    fn test_geo_deserializes_string_and_number_forms() {
        let geo: Geo = serde_json::from_str(r#"{"lat": "-68.6102", "lng": -47.0653}"#).unwrap();
        assert_eq!(geo.resolved().unwrap(), (-68.6102, -47.0653));
    }

    #[test]
    fn test_address_without_geo() {
        let address: Address = serde_json::from_str(r#"{"street": "Kulas Light"}"#).unwrap();
        assert!(address.geo.is_none());
    }
}

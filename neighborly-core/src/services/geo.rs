//! Geo service - great-circle distances and nearest-neighbor assignment

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{User, NO_CLOSEST_USER};

/// Twice the Earth radius used by the distance formula (R = 6367 km)
pub const EARTH_DIAMETER_KM: f64 = 12734.0;

/// Upper bound for any surface distance; the scan starts from here so the
/// first reachable candidate always wins (half the Earth's circumference)
pub const MAX_SCAN_DISTANCE_KM: f64 = 20040.0;

/// Outcome of a nearest-neighbor pass
#[derive(Debug, Serialize)]
pub struct GeoOutcome {
    /// True iff every user had usable coordinates
    pub complete: bool,
    /// Users that received a nearest-neighbor scan
    pub scanned: i64,
    /// Users skipped for lack of coordinates
    pub skipped: i64,
    pub warnings: Vec<String>,
}

/// Geo service for nearest-neighbor computation
#[derive(Debug, Default)]
pub struct GeoService;

impl GeoService {
    pub fn new() -> Self {
        Self
    }

    /// Assign to every user the id of the geographically closest other user
    ///
    /// Self-comparison is excluded by index, not by value, so two users at
    /// identical coordinates still see each other. Candidates without
    /// coordinates are unreachable and silently skipped; a user without
    /// coordinates is skipped with a warning and marked with the sentinel.
    /// Ties keep the first minimal candidate in input order.
    ///
    /// Brute-force O(n²); the target use case is small directories, not
    /// large-scale geo data.
    pub fn assign_closest_user(&self, users: &mut [User]) -> Result<GeoOutcome> {
        let mut outcome = GeoOutcome {
            complete: true,
            scanned: 0,
            skipped: 0,
            warnings: Vec::new(),
        };

        // Coerce everything up front; a present-but-garbage coordinate is a
        // fatal InvalidCoordinate, a missing one is merely unreachable.
        let mut coords: Vec<Option<(f64, f64)>> = Vec::with_capacity(users.len());
        for user in users.iter() {
            match user.coordinates() {
                Some(geo) => coords.push(Some(geo.resolved()?)),
                None => coords.push(None),
            }
        }

        for i in 0..users.len() {
            let (lat, lng) = match coords[i] {
                Some(pair) => pair,
                None => {
                    outcome.warnings.push(format!(
                        "user {} ({}) has no coordinates, skipping",
                        users[i].id, users[i].username
                    ));
                    outcome.complete = false;
                    outcome.skipped += 1;
                    users[i].closest_user_id = Some(NO_CLOSEST_USER);
                    continue;
                }
            };

            let mut best_distance = MAX_SCAN_DISTANCE_KM;
            let mut best_id = NO_CLOSEST_USER;

            for (j, candidate) in coords.iter().enumerate() {
                if j == i {
                    continue;
                }
                let (c_lat, c_lng) = match candidate {
                    Some(pair) => *pair,
                    None => continue,
                };
                let distance = haversine_km(lat, lng, c_lat, c_lng);
                if distance < best_distance {
                    best_distance = distance;
                    best_id = users[j].id;
                }
            }

            users[i].closest_user_id = Some(best_id);
            outcome.scanned += 1;
        }

        Ok(outcome)
    }
}

/// Great-circle distance in kilometers between two coordinate pairs
///
/// Haversine formula over decimal degrees:
/// `d = 2R·asin(sqrt(sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)))`
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let (lat1, lng1) = (lat1.to_radians(), lng1.to_radians());
    let (lat2, lng2) = (lat2.to_radians(), lng2.to_radians());

    let h = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lng2 - lng1) / 2.0).sin().powi(2);

    EARTH_DIAMETER_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::Error;
    use crate::domain::{Coordinate, Geo};

    const KRAKOW: (f64, f64) = (50.049683, 19.944544);
    const WARSAW: (f64, f64) = (52.237049, 21.017532);

    fn user_at(id: i64, username: &str, lat: f64, lng: f64) -> User {
        User::new(id, username).with_geo(Geo::new(lat, lng))
    }

    #[test]
    fn test_krakow_to_warsaw_reference_distance() {
        let d = haversine_km(KRAKOW.0, KRAKOW.1, WARSAW.0, WARSAW.1);
        assert!((d - 254.3).abs() < 1.0, "got {} km", d);
    }

    #[test]
    fn test_distance_identity() {
        assert_eq!(haversine_km(KRAKOW.0, KRAKOW.1, KRAKOW.0, KRAKOW.1), 0.0);
        assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let there = haversine_km(KRAKOW.0, KRAKOW.1, WARSAW.0, WARSAW.1);
        let back = haversine_km(WARSAW.0, WARSAW.1, KRAKOW.0, KRAKOW.1);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_prefers_closer_longitude_neighbor() {
        let mut users = vec![
            user_at(1, "a", 10.0, 20.0),
            user_at(2, "b", -10.0, -20.0),
            user_at(3, "c", 10.0, 21.0),
        ];

        let outcome = GeoService::new().assign_closest_user(&mut users).unwrap();

        assert!(outcome.complete);
        assert_eq!(outcome.scanned, 3);
        assert_eq!(users[0].closest_user_id, Some(3));
        assert_eq!(users[2].closest_user_id, Some(1));
    }

    #[test]
    fn test_user_without_coordinates_gets_sentinel_and_flags_batch() {
        let mut users = vec![
            user_at(1, "a", KRAKOW.0, KRAKOW.1),
            User::new(2, "nowhere"),
            user_at(3, "c", WARSAW.0, WARSAW.1),
        ];

        let outcome = GeoService::new().assign_closest_user(&mut users).unwrap();

        assert!(!outcome.complete);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(users[1].closest_user_id, Some(NO_CLOSEST_USER));
        // the others still pair with each other
        assert_eq!(users[0].closest_user_id, Some(3));
        assert_eq!(users[2].closest_user_id, Some(1));
    }

    #[test]
    fn test_all_users_without_addresses_yield_sentinels() {
        let mut users = vec![User::new(1, "a"), User::new(2, "b"), User::new(3, "c")];

        let outcome = GeoService::new().assign_closest_user(&mut users).unwrap();

        assert!(!outcome.complete);
        assert_eq!(outcome.skipped, 3);
        for user in &users {
            assert_eq!(user.closest_user_id, Some(NO_CLOSEST_USER));
        }
    }

    #[test]
    fn test_lone_user_with_coordinates_gets_sentinel() {
        let mut users = vec![user_at(1, "alone", KRAKOW.0, KRAKOW.1), User::new(2, "b")];

        let outcome = GeoService::new().assign_closest_user(&mut users).unwrap();

        // user 1 had coordinates but no reachable candidate
        assert_eq!(users[0].closest_user_id, Some(NO_CLOSEST_USER));
        assert!(!outcome.complete);
    }

    #[test]
    fn test_identical_coordinates_still_pair_by_index() {
        let mut users = vec![
            user_at(1, "twin-a", 10.0, 20.0),
            user_at(2, "twin-b", 10.0, 20.0),
        ];

        GeoService::new().assign_closest_user(&mut users).unwrap();

        assert_eq!(users[0].closest_user_id, Some(2));
        assert_eq!(users[1].closest_user_id, Some(1));
    }

    #[test]
    fn test_tie_keeps_first_candidate_in_scan_order() {
        // users 2 and 3 sit at the same spot; user 1 must pick the earlier one
        let mut users = vec![
            user_at(1, "a", 0.0, 0.0),
            user_at(2, "b", 10.0, 10.0),
            user_at(3, "c", 10.0, 10.0),
        ];

        GeoService::new().assign_closest_user(&mut users).unwrap();

        assert_eq!(users[0].closest_user_id, Some(2));
    }

    #[test]
    fn test_garbage_coordinate_is_fatal() {
        let mut users = vec![
            user_at(1, "a", KRAKOW.0, KRAKOW.1),
            User::new(2, "b").with_geo(Geo::new(Coordinate::Text("up and to the left".into()), 0.0)),
        ];

        let err = GeoService::new().assign_closest_user(&mut users).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate(_)));
    }
}

//! User domain model

use serde::{Deserialize, Serialize};

use crate::domain::geo::{Address, Geo};
use crate::domain::post::Post;

/// Sentinel id meaning "no reachable neighbor was found"
pub const NO_CLOSEST_USER: i64 = -1;

/// A directory user
///
/// `posts` and `closest_user_id` are derived fields: they start empty/unset
/// and are filled in by the join and geo passes respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub posts: Vec<Post>,
    /// `None` until the geo pass ran; afterwards either a real user id or
    /// [`NO_CLOSEST_USER`]
    #[serde(default)]
    pub closest_user_id: Option<i64>,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            address: None,
            posts: Vec::new(),
            closest_user_id: None,
        }
    }

    /// Builder-style helper for attaching coordinates
    pub fn with_geo(mut self, geo: Geo) -> Self {
        self.address = Some(Address { geo: Some(geo) });
        self
    }

    /// The user's coordinates, if the nested address/geo chain is present
    pub fn coordinates(&self) -> Option<&Geo> {
        self.address.as_ref()?.geo.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_starts_without_derived_fields() {
        let user = User::new(1, "Bret");
        assert!(user.posts.is_empty());
        assert!(user.closest_user_id.is_none());
    }

    #[test]
    fn test_coordinates_requires_full_chain() {
        let mut user = User::new(1, "Bret");
        assert!(user.coordinates().is_none());

        user.address = Some(Address { geo: None });
        assert!(user.coordinates().is_none());

        let user = user.with_geo(Geo::new(-37.3159, 81.1496));
        assert!(user.coordinates().is_some());
    }
}

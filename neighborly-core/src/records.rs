//! Record validation - typed conversion of raw upstream collections
//!
//! Upstream sources hand back `serde_json::Value`. A payload that is not an
//! array of records at all is a fatal `InvalidCollection` error; an individual
//! record that fails to convert is skipped with a warning so the rest of the
//! batch survives.

use serde_json::Value as JsonValue;

use crate::domain::result::{Error, Result};
use crate::domain::{Post, User};

/// Users that survived validation, plus warnings for those that did not
#[derive(Debug, Default)]
pub struct ParsedUsers {
    pub users: Vec<User>,
    pub warnings: Vec<String>,
}

/// Posts that survived validation, plus warnings for those that did not
#[derive(Debug, Default)]
pub struct ParsedPosts {
    pub posts: Vec<Post>,
    pub warnings: Vec<String>,
}

fn as_records<'a>(value: &'a JsonValue, what: &str) -> Result<&'a Vec<JsonValue>> {
    value.as_array().ok_or_else(|| {
        Error::invalid_collection(format!("{} payload is not an array of records", what))
    })
}

/// Convert a raw users payload into typed users
///
/// A user record needs an integer `id` and a string `username`; everything
/// else (including the whole address) is optional. Records missing the
/// required fields are skipped, not fatal.
pub fn users_from_value(value: &JsonValue) -> Result<ParsedUsers> {
    let records = as_records(value, "users")?;

    let mut parsed = ParsedUsers::default();
    for (index, record) in records.iter().enumerate() {
        match serde_json::from_value::<User>(record.clone()) {
            Ok(user) => parsed.users.push(user),
            Err(e) => parsed.warnings.push(format!(
                "user record at index {} is invalid, ignoring: {}",
                index, e
            )),
        }
    }
    Ok(parsed)
}

/// Convert a raw posts payload into typed posts
///
/// Posts keep all fields optional; only records that are not objects at all
/// are skipped here. Field-level policy belongs to the consuming operation.
pub fn posts_from_value(value: &JsonValue) -> Result<ParsedPosts> {
    let records = as_records(value, "posts")?;

    let mut parsed = ParsedPosts::default();
    for (index, record) in records.iter().enumerate() {
        if !record.is_object() {
            parsed.warnings.push(format!(
                "post record at index {} is not an object, ignoring",
                index
            ));
            continue;
        }
        match serde_json::from_value::<Post>(record.clone()) {
            Ok(post) => parsed.posts.push(post),
            Err(e) => parsed.warnings.push(format!(
                "post record at index {} is invalid, ignoring: {}",
                index, e
            )),
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_users_payload_must_be_an_array() {
        let err = users_from_value(&json!({"id": 1})).unwrap_err();
        assert!(matches!(err, Error::InvalidCollection(_)));

        let err = users_from_value(&JsonValue::Null).unwrap_err();
        assert!(matches!(err, Error::InvalidCollection(_)));
    }

    #[test]
    fn test_empty_collections_are_well_formed() {
        assert!(users_from_value(&json!([])).unwrap().users.is_empty());
        assert!(posts_from_value(&json!([])).unwrap().posts.is_empty());
    }

    #[test]
    fn test_user_missing_username_is_skipped_with_warning() {
        let payload = json!([
            {"id": 1, "username": "Bret"},
            {"id": 2},
            {"id": 3, "username": "Samantha"}
        ]);
        let parsed = users_from_value(&payload).unwrap();
        assert_eq!(parsed.users.len(), 2);
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("index 1"));
    }

    #[test]
    fn test_user_geo_survives_conversion() {
        let payload = json!([{
            "id": 1,
            "username": "Bret",
            "address": {"street": "Kulas Light", "geo": {"lat": "-37.3159", "lng": "81.1496"}}
        }]);
        let parsed = users_from_value(&payload).unwrap();
        let geo = parsed.users[0].coordinates().expect("geo should survive");
        assert_eq!(geo.resolved().unwrap(), (-37.3159, 81.1496));
    }

    #[test]
    fn test_post_keeps_optional_fields() {
        let payload = json!([
            {"id": 1, "userId": 1, "title": "first"},
            {"id": 2, "body": "no title or owner"}
        ]);
        let parsed = posts_from_value(&payload).unwrap();
        assert_eq!(parsed.posts.len(), 2);
        assert!(parsed.warnings.is_empty());
        assert!(parsed.posts[1].title.is_none());
        assert!(parsed.posts[1].user_id.is_none());
    }

    #[test]
    fn test_non_object_post_is_skipped() {
        let payload = json!([{"id": 1, "userId": 1, "title": "first"}, 42, "nope"]);
        let parsed = posts_from_value(&payload).unwrap();
        assert_eq!(parsed.posts.len(), 1);
        assert_eq!(parsed.warnings.len(), 2);
    }
}

//! Post domain model

use serde::{Deserialize, Serialize};

/// A post as delivered by the upstream source
///
/// Every field is optional: upstream records are untrusted, and which missing
/// field is tolerable is decided by the operation consuming the post (the
/// joiner skips and warns, the uniqueness check fails the whole batch).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Post {
    pub fn new(id: i64, user_id: i64, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            user_id: Some(user_id),
            title: Some(title.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_camel_case() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "userId": 7, "title": "hello"}"#)
            .unwrap();
        assert_eq!(post.user_id, Some(7));
        assert_eq!(post.title.as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_absent() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "body": "text"}"#).unwrap();
        assert!(post.user_id.is_none());
        assert!(post.title.is_none());
    }
}

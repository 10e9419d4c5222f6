//! Report service - turn enriched users into presentable entries
//!
//! All user-facing wording lives here and in the CLI; the join/title/geo
//! engines only produce structured results.

use serde::Serialize;

use crate::domain::{User, NO_CLOSEST_USER};
use crate::services::titles::TitleReport;

/// Post count for one user
#[derive(Debug, Serialize)]
pub struct PostCountEntry {
    pub username: String,
    pub posts: i64,
}

/// Nearest neighbor for one user
#[derive(Debug, Serialize)]
pub struct NearestEntry {
    pub username: String,
    /// Absent when the user had no reachable neighbor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_username: Option<String>,
}

/// Report service
#[derive(Debug, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Per-user post counts, in user order
    pub fn post_counts(&self, users: &[User]) -> Vec<PostCountEntry> {
        users
            .iter()
            .map(|user| PostCountEntry {
                username: user.username.clone(),
                posts: user.posts.len() as i64,
            })
            .collect()
    }

    /// Per-user nearest neighbor usernames, in user order
    ///
    /// The sentinel (and an id that matches no user, which should not happen)
    /// both render as absent rather than as an error.
    pub fn nearest_neighbors(&self, users: &[User]) -> Vec<NearestEntry> {
        users
            .iter()
            .map(|user| {
                let closest_username = user
                    .closest_user_id
                    .filter(|&id| id != NO_CLOSEST_USER)
                    .and_then(|id| users.iter().find(|u| u.id == id))
                    .map(|u| u.username.clone());
                NearestEntry {
                    username: user.username.clone(),
                    closest_username,
                }
            })
            .collect()
    }

    /// One-line verdict for a title report
    pub fn title_verdict(&self, report: &TitleReport) -> String {
        if report.all_unique {
            "All post titles are unique".to_string()
        } else {
            format!(
                "{} post title(s) are not unique",
                report.duplicates.len()
            )
        }
    }
}

//! Join service - attach posts to their owning users

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Post, User};

/// Options controlling join behavior
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// Whether a post whose owner id matches no known user counts as a
    /// record-level failure. Skipping is always non-fatal either way; this
    /// only decides if the outcome is still reported as complete.
    pub orphans_fail: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self { orphans_fail: true }
    }
}

/// Outcome of a join pass
#[derive(Debug, Serialize)]
pub struct JoinOutcome {
    /// True iff no post record was skipped
    pub complete: bool,
    /// Posts attached to a user
    pub attached: i64,
    /// Posts skipped (malformed or orphaned)
    pub skipped: i64,
    pub warnings: Vec<String>,
}

/// Join service for attaching posts to users
pub struct JoinService {
    options: JoinOptions,
}

impl JoinService {
    pub fn new(options: JoinOptions) -> Self {
        Self { options }
    }

    /// Group posts by owner and attach each group to its user
    ///
    /// Groups keep first-seen order and posts keep input order within a
    /// group. A post missing its title or owner id is skipped with a warning;
    /// so is a group whose owner matches no user. Users are matched by linear
    /// search, first match wins.
    pub fn assign_posts(&self, users: &mut [User], posts: &[Post]) -> JoinOutcome {
        let mut outcome = JoinOutcome {
            complete: true,
            attached: 0,
            skipped: 0,
            warnings: Vec::new(),
        };

        let mut owner_order: Vec<i64> = Vec::new();
        let mut groups: HashMap<i64, Vec<Post>> = HashMap::new();

        for (index, post) in posts.iter().enumerate() {
            let owner = match (post.user_id, post.title.as_ref()) {
                (Some(owner), Some(_)) => owner,
                _ => {
                    outcome.warnings.push(format!(
                        "post at index {} is missing its title or owner id, ignoring",
                        index
                    ));
                    outcome.complete = false;
                    outcome.skipped += 1;
                    continue;
                }
            };

            let group = groups.entry(owner).or_default();
            if group.is_empty() {
                owner_order.push(owner);
            }
            group.push(post.clone());
        }

        for owner in owner_order {
            let group = match groups.remove(&owner) {
                Some(group) => group,
                None => continue,
            };

            match users.iter_mut().find(|u| u.id == owner) {
                Some(user) => {
                    outcome.attached += group.len() as i64;
                    user.posts = group;
                }
                None => {
                    outcome.warnings.push(format!(
                        "{} post(s) belong to unknown user {}, ignoring",
                        group.len(),
                        owner
                    ));
                    outcome.skipped += group.len() as i64;
                    if self.options.orphans_fail {
                        outcome.complete = false;
                    }
                }
            }
        }

        outcome
    }
}

impl Default for JoinService {
    fn default() -> Self {
        Self::new(JoinOptions::default())
    }
}

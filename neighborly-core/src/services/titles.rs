//! Title service - post title extraction and duplicate detection

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::Post;

/// Verdict of a title uniqueness check
#[derive(Debug, Serialize)]
pub struct TitleReport {
    /// True iff no title appears more than once
    pub all_unique: bool,
    /// Every title, in input order
    pub titles: Vec<String>,
    /// Duplicated titles, first-seen order, once per distinct value
    pub duplicates: Vec<String>,
}

/// Title service for uniqueness checking
#[derive(Debug, Default)]
pub struct TitleService;

impl TitleService {
    pub fn new() -> Self {
        Self
    }

    /// Check whether all post titles are pairwise distinct
    ///
    /// Unlike the joiner there is no per-record tolerance here: uniqueness
    /// over a partial title set would be meaningless, so a single post
    /// without a title fails the whole collection.
    pub fn titles_unique(&self, posts: &[Post]) -> Result<TitleReport> {
        let mut titles = Vec::with_capacity(posts.len());
        for (index, post) in posts.iter().enumerate() {
            let title = post.title.as_ref().ok_or_else(|| {
                Error::malformed_posts(format!("post at index {} has no title", index))
            })?;
            titles.push(title.clone());
        }

        let duplicates = duplicates_of(&titles);
        Ok(TitleReport {
            all_unique: duplicates.is_empty(),
            titles,
            duplicates,
        })
    }
}

/// Values occurring at least twice, in first-seen order, once per value
pub fn duplicates_of<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut reported: HashSet<&T> = HashSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        if counts[value] >= 2 && reported.insert(value) {
            duplicates.push(value.clone());
        }
    }
    duplicates
}

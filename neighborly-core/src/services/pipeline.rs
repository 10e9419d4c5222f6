//! Pipeline service - fixed-order orchestration of the enrichment passes
//!
//! One run fetches both collections from a record source, validates them,
//! then applies join, title uniqueness, and nearest-neighbor in that order.
//! Record-level failures accumulate as warnings; fatal errors propagate.

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::RecordSource;
use crate::records;
use crate::services::geo::{GeoOutcome, GeoService};
use crate::services::join::{JoinOptions, JoinOutcome, JoinService};
use crate::services::report::{NearestEntry, PostCountEntry, ReportService};
use crate::services::titles::{TitleReport, TitleService};

/// Everything one pipeline run produced
#[derive(Debug, Serialize)]
pub struct PipelineReport {
    /// Name of the record source that supplied the data
    pub source: String,
    /// True iff no record anywhere in the batch was skipped
    pub complete: bool,
    pub join: JoinOutcome,
    pub titles: TitleReport,
    pub geo: GeoOutcome,
    pub post_counts: Vec<PostCountEntry>,
    pub nearest: Vec<NearestEntry>,
    /// Warnings from record validation, before any pass ran
    pub parse_warnings: Vec<String>,
    /// The enriched users themselves
    pub users: Vec<User>,
}

/// Pipeline service
pub struct PipelineService {
    join_service: JoinService,
    title_service: TitleService,
    geo_service: GeoService,
    report_service: ReportService,
}

impl PipelineService {
    pub fn new(join_options: JoinOptions) -> Self {
        Self {
            join_service: JoinService::new(join_options),
            title_service: TitleService::new(),
            geo_service: GeoService::new(),
            report_service: ReportService::new(),
        }
    }

    /// Run the full pipeline against a record source
    pub fn run(&self, source: &dyn RecordSource) -> Result<PipelineReport> {
        let raw_users = source.fetch_users()?;
        let raw_posts = source.fetch_posts()?;

        let parsed_users = records::users_from_value(&raw_users)?;
        let parsed_posts = records::posts_from_value(&raw_posts)?;

        let mut users = parsed_users.users;
        let mut parse_warnings = parsed_users.warnings;
        parse_warnings.extend(parsed_posts.warnings);

        let join = self.join_service.assign_posts(&mut users, &parsed_posts.posts);
        let titles = self.title_service.titles_unique(&parsed_posts.posts)?;
        let geo = self.geo_service.assign_closest_user(&mut users)?;

        let post_counts = self.report_service.post_counts(&users);
        let nearest = self.report_service.nearest_neighbors(&users);

        Ok(PipelineReport {
            source: source.name().to_string(),
            complete: join.complete && geo.complete && parse_warnings.is_empty(),
            join,
            titles,
            geo,
            post_counts,
            nearest,
            parse_warnings,
            users,
        })
    }
}

impl Default for PipelineService {
    fn default() -> Self {
        Self::new(JoinOptions::default())
    }
}

//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on one pass of the enrichment pipeline.

mod geo;
mod join;
mod pipeline;
mod report;
mod titles;

pub use geo::{haversine_km, GeoOutcome, GeoService, EARTH_DIAMETER_KM, MAX_SCAN_DISTANCE_KM};
pub use join::{JoinOptions, JoinOutcome, JoinService};
pub use pipeline::{PipelineReport, PipelineService};
pub use report::{NearestEntry, PostCountEntry, ReportService};
pub use titles::{duplicates_of, TitleReport, TitleService};

//! Neighborly Core - batch enrichment for small user directories
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Post, Geo, etc.)
//! - **ports**: Trait definitions for external dependencies (RecordSource)
//! - **services**: The enrichment passes (join, titles, geo) and reporting
//! - **adapters**: Concrete implementations (HTTP directory, demo fixtures)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod records;
pub mod services;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{DemoRecordSource, HttpRecordSource};
use config::Config;
use ports::RecordSource;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Address, Coordinate, Geo, Post, User, NO_CLOSEST_USER};

/// Main context for neighborly operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the registered record sources, and all services.
pub struct NeighborlyContext {
    pub config: Config,
    pub join_service: JoinService,
    pub title_service: TitleService,
    pub geo_service: GeoService,
    pub report_service: ReportService,
    pub pipeline_service: PipelineService,
    sources: HashMap<String, Arc<dyn RecordSource>>,
}

impl NeighborlyContext {
    /// Create a new neighborly context
    pub fn new(neighborly_dir: &Path) -> Result<Self> {
        let config = Config::load(neighborly_dir)?;
        Self::with_config(config)
    }

    /// Create a context from an explicit configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let join_options = JoinOptions {
            orphans_fail: config.orphans_fail,
        };

        // Register built-in record sources
        let mut sources: HashMap<String, Arc<dyn RecordSource>> = HashMap::new();
        let http = Arc::new(HttpRecordSource::new(&config.users_url, &config.posts_url)?);
        sources.insert("http".to_string(), http);
        sources.insert("demo".to_string(), Arc::new(DemoRecordSource::new()));

        Ok(Self {
            config,
            join_service: JoinService::new(join_options.clone()),
            title_service: TitleService::new(),
            geo_service: GeoService::new(),
            report_service: ReportService::new(),
            pipeline_service: PipelineService::new(join_options),
            sources,
        })
    }

    /// Look up a registered record source by name
    pub fn source(&self, name: &str) -> Result<Arc<dyn RecordSource>> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown record source: {}", name))
    }
}

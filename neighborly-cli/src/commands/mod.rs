//! CLI command implementations

pub mod nearest;
pub mod posts;
pub mod run;
pub mod titles;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use neighborly_core::adapters::HttpRecordSource;
use neighborly_core::ports::RecordSource;
use neighborly_core::NeighborlyContext;

use crate::output;

/// Get the neighborly directory from environment or default
pub fn get_neighborly_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NEIGHBORLY_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".neighborly")
    }
}

/// Get or create the neighborly context
pub fn get_context() -> Result<NeighborlyContext> {
    let neighborly_dir = get_neighborly_dir();

    std::fs::create_dir_all(&neighborly_dir)
        .with_context(|| format!("Failed to create neighborly directory: {:?}", neighborly_dir))?;

    NeighborlyContext::new(&neighborly_dir).context("Failed to initialize neighborly context")
}

/// Resolve the record source for a command
///
/// Endpoint overrides force a fresh HTTP source regardless of the named one;
/// otherwise the context's registered source is used.
pub fn resolve_source(
    ctx: &NeighborlyContext,
    name: &str,
    users_url: Option<String>,
    posts_url: Option<String>,
) -> Result<Arc<dyn RecordSource>> {
    if users_url.is_some() || posts_url.is_some() {
        let users_url = users_url.unwrap_or_else(|| ctx.config.users_url.clone());
        let posts_url = posts_url.unwrap_or_else(|| ctx.config.posts_url.clone());
        let source = HttpRecordSource::new(&users_url, &posts_url)
            .context("Failed to create HTTP record source")?;
        return Ok(Arc::new(source));
    }

    ctx.source(name)
}

/// Print accumulated warnings, if any
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        output::warning(&format!("warning: {}", warning));
    }
}

//! Record source port
//!
//! Defines the interface for fetching raw user and post collections from
//! external sources (HTTP directories, demo fixtures, etc.)

use serde_json::Value as JsonValue;

use crate::domain::result::Result;

/// Record source trait
///
/// Implementations return the raw, still-untyped JSON payloads. The pipeline
/// validates them; sources only move bytes. Keeping the payload loose here is
/// deliberate: validation policy (skip vs fail) belongs to the operations,
/// not to the transport.
pub trait RecordSource: Send + Sync {
    /// Source name (e.g. "http", "demo")
    fn name(&self) -> &str;

    /// Fetch the raw users collection
    fn fetch_users(&self) -> Result<JsonValue>;

    /// Fetch the raw posts collection
    fn fetch_posts(&self) -> Result<JsonValue>;
}

//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - HTTP client for the RecordSource port (JSON directory endpoints)
//! - Demo fixture provider for offline runs and testing

pub mod demo;
pub mod http;

pub use demo::DemoRecordSource;
pub use http::HttpRecordSource;

//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod geo;
mod post;
mod user;
pub mod result;

pub use geo::{Address, Coordinate, Geo};
pub use post::Post;
pub use user::{User, NO_CLOSEST_USER};

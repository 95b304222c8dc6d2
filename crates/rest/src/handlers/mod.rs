//! HTTP request handlers.
//!
//! - [`entity`] - List and create records of any entity kind
//! - [`links`] - List and create doctor-patient links
//! - [`analytics`] - Aggregate statistics
//! - [`health`] - Health, liveness and readiness probes
//! - [`index`] - Service index

pub mod analytics;
pub mod entity;
pub mod health;
pub mod index;
pub mod links;

// Re-export handlers for convenience
pub use analytics::analytics_handler;
pub use entity::{create_handler, list_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use links::{create_link_handler, list_links_handler};

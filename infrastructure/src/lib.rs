//! Infrastructure layer for retroform
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: in-memory repositories standing in for the
//! persistence collaborator, configuration file loading and the JSONL
//! audit logger.

pub mod config;
pub mod logging;
pub mod memory;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlAuditLogger;
pub use memory::{
    InMemoryMemberRepository, InMemoryReviewFormRepository, InMemoryReviewRepository,
    InMemoryTemplateRepository,
};

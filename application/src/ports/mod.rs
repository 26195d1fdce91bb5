//! Ports consumed by the use-case services.
//!
//! Repository ports abstract the persistence collaborator: they hand out
//! aggregates, commit changed rows and assign identifiers at commit time.
//! Adapters live in the infrastructure layer. The audit port records admin
//! mutations to a structured log.

pub mod audit;
pub mod member_repository;
pub mod review_form_repository;
pub mod review_repository;
pub mod template_repository;

use thiserror::Error;

/// Errors a persistence adapter can surface.
///
/// Domain-level outcomes (missing aggregate, ownership, validation) are NOT
/// repository errors; ports express absence as `Option` and the services
/// translate it. These variants cover genuine storage failures only.
#[derive(Error, Debug, Clone)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored data is corrupted: {0}")]
    Corrupted(String),
}

pub use audit::{AuditEvent, AuditLogger, NoAuditLogger};
pub use member_repository::MemberRepository;
pub use review_form_repository::ReviewFormRepository;
pub use review_repository::ReviewRepository;
pub use template_repository::TemplateRepository;

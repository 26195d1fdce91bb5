//! Application layer for retroform
//!
//! This crate contains the use-case services, port definitions, pagination
//! types and service configuration. It depends only on the domain layer;
//! adapters for the ports live in the infrastructure crate.

pub mod config;
pub mod pagination;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use pagination::{Page, PageRequest};
pub use ports::{
    AuditEvent, AuditLogger, MemberRepository, NoAuditLogger, RepositoryError,
    ReviewFormRepository, ReviewRepository, TemplateRepository,
};
pub use use_cases::{
    ServiceError, admin::AdminService, members::MemberService, review_forms::ReviewFormService,
    reviews::ReviewService, templates::TemplateService,
};

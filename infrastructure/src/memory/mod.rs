//! In-memory adapters for the repository ports.
//!
//! Each adapter stands in for the persistence collaborator: it hands out
//! aggregates by value, assigns identifiers at save time and answers
//! uniqueness checks from its authoritative map. Suitable for tests and
//! single-process deployments; a database-backed adapter would implement
//! the same ports.
//!
//! - [`InMemoryMemberRepository`]
//! - [`InMemoryTemplateRepository`]
//! - [`InMemoryReviewFormRepository`]
//! - [`InMemoryReviewRepository`]

mod member_repository;
mod review_form_repository;
mod review_repository;
mod template_repository;

pub use member_repository::InMemoryMemberRepository;
pub use review_form_repository::InMemoryReviewFormRepository;
pub use review_repository::InMemoryReviewRepository;
pub use template_repository::InMemoryTemplateRepository;

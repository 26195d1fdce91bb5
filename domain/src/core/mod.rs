//! Core domain concepts shared across all subdomains.
//!
//! - [`id`] — typed entity identifiers
//! - [`error::DomainError`] — domain-level errors
//! - [`ownership`] — creator-only mutation guard

pub mod error;
pub mod id;
pub mod ownership;

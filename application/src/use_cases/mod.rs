//! Use-case services.
//!
//! One service per aggregate, mirroring the layered shape
//! controller → service → repository: services load aggregates through the
//! ports, apply domain rules (validation, reconciliation, ownership) and
//! commit the result. All services are synchronous request-scoped logic —
//! transaction boundaries belong to the embedding collaborator.
//!
//! - [`templates::TemplateService`]
//! - [`review_forms::ReviewFormService`]
//! - [`reviews::ReviewService`]
//! - [`members::MemberService`]
//! - [`admin::AdminService`]

pub mod admin;
pub mod members;
pub mod review_forms;
pub mod reviews;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_support;

use crate::ports::RepositoryError;
use retroform_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the use-case services.
///
/// Domain outcomes keep their taxonomy (validation / not-found /
/// authorization / conflict); storage failures are wrapped separately so
/// the transport layer can map them to different responses.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::not_found(message).into()
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::conflict(message).into()
    }

    /// The domain error inside, if this is a domain outcome.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ServiceError::Domain(e) => Some(e),
            ServiceError::Repository(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_not_found)
    }

    pub fn is_validation(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_validation)
    }

    pub fn is_authorization(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_authorization)
    }

    pub fn is_conflict(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_conflict)
    }
}

//! Review form repository port.

use super::RepositoryError;
use crate::pagination::{Page, PageRequest};
use async_trait::async_trait;
use retroform_domain::{FormCode, MemberId, ReviewForm, ReviewFormId};

/// Persistence port for review forms.
///
/// Same id-assignment contract as the template port. Code lookups answer
/// from the authoritative store; the service's bounded retry loop relies on
/// that when allocating new codes.
#[async_trait]
pub trait ReviewFormRepository: Send + Sync {
    async fn save(&self, form: ReviewForm) -> Result<ReviewForm, RepositoryError>;

    async fn find_by_id(&self, id: ReviewFormId) -> Result<Option<ReviewForm>, RepositoryError>;

    /// Look up by the public code.
    async fn find_by_code(&self, code: &FormCode) -> Result<Option<ReviewForm>, RepositoryError>;

    /// Whether a form with this code is already persisted.
    async fn code_exists(&self, code: &FormCode) -> Result<bool, RepositoryError>;

    /// A member's forms, most recently updated first.
    async fn find_by_owner(
        &self,
        owner: MemberId,
        page: PageRequest,
    ) -> Result<Page<ReviewForm>, RepositoryError>;

    /// All forms, unpaged. Admin surface only.
    async fn find_all(&self) -> Result<Vec<ReviewForm>, RepositoryError>;

    /// Delete the form and, with it, its owned questions.
    async fn delete(&self, id: ReviewFormId) -> Result<(), RepositoryError>;
}

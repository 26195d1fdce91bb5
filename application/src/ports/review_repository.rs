//! Review repository port.

use super::RepositoryError;
use crate::pagination::{Page, PageRequest};
use async_trait::async_trait;
use retroform_domain::{MemberId, Review, ReviewFormId, ReviewId};

/// Persistence port for submitted reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Commit a review, assigning an id when the entity has none yet.
    async fn save(&self, review: Review) -> Result<Review, RepositoryError>;

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, RepositoryError>;

    /// Reviews submitted against a form, most recently updated first.
    async fn find_by_form(
        &self,
        form: ReviewFormId,
        page: PageRequest,
    ) -> Result<Page<Review>, RepositoryError>;

    /// A member's own reviews, most recently updated first.
    async fn find_by_owner(&self, owner: MemberId) -> Result<Vec<Review>, RepositoryError>;

    /// All reviews, unpaged. Admin surface only.
    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError>;

    /// Distinct authors of a form's reviews, in first-submission order.
    async fn find_participant_ids(
        &self,
        form: ReviewFormId,
    ) -> Result<Vec<MemberId>, RepositoryError>;

    async fn delete(&self, id: ReviewId) -> Result<(), RepositoryError>;

    /// Delete every review of a form; returns how many were removed.
    async fn delete_by_form(&self, form: ReviewFormId) -> Result<u64, RepositoryError>;
}

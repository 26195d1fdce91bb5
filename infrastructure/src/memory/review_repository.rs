//! In-memory review repository.

use async_trait::async_trait;
use retroform_application::pagination::{Page, PageRequest};
use retroform_application::ports::{RepositoryError, ReviewRepository};
use retroform_domain::{MemberId, Owned, Review, ReviewFormId, ReviewId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Review store backed by a map guarded by an async lock.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    rows: RwLock<HashMap<ReviewId, Review>>,
    sequence: AtomicU64,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> ReviewId {
        ReviewId::new(self.sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn save(&self, mut review: Review) -> Result<Review, RepositoryError> {
        if review.id().is_none() {
            review.assign_id(self.next_id());
        }
        let id = review
            .id()
            .ok_or_else(|| RepositoryError::Corrupted("review id missing after assignment".into()))?;
        self.rows.write().await.insert(id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_form(
        &self,
        form: ReviewFormId,
        page: PageRequest,
    ) -> Result<Page<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.form_id() == form)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| std::cmp::Reverse(r.updated_at()));
        Ok(Page::paginate(reviews, page))
    }

    async fn find_by_owner(&self, owner: MemberId) -> Result<Vec<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.owner_id() == owner)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| std::cmp::Reverse(r.updated_at()));
        Ok(reviews)
    }

    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self.rows.read().await.values().cloned().collect();
        reviews.sort_by_key(|r| r.id());
        Ok(reviews)
    }

    async fn find_participant_ids(
        &self,
        form: ReviewFormId,
    ) -> Result<Vec<MemberId>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.form_id() == form)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.created_at());

        let mut participants = Vec::new();
        for review in reviews {
            if !participants.contains(&review.owner_id()) {
                participants.push(review.owner_id());
            }
        }
        Ok(participants)
    }

    async fn delete(&self, id: ReviewId) -> Result<(), RepositoryError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn delete_by_form(&self, form: ReviewFormId) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, review| review.form_id() != form);
        Ok((before - rows.len()) as u64)
    }
}

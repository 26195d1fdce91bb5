//! In-memory review form repository.

use async_trait::async_trait;
use retroform_application::pagination::{Page, PageRequest};
use retroform_application::ports::{RepositoryError, ReviewFormRepository};
use retroform_domain::{FormCode, MemberId, Owned, QuestionId, ReviewForm, ReviewFormId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Review form store backed by a map guarded by an async lock.
///
/// Codes are answered from the live map, so `code_exists` is authoritative
/// for the bounded allocation retry in the service layer.
#[derive(Default)]
pub struct InMemoryReviewFormRepository {
    rows: RwLock<HashMap<ReviewFormId, ReviewForm>>,
    sequence: AtomicU64,
    question_sequence: AtomicU64,
}

impl InMemoryReviewFormRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> ReviewFormId {
        ReviewFormId::new(self.sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn next_question_id(&self) -> QuestionId {
        QuestionId::new(self.question_sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait]
impl ReviewFormRepository for InMemoryReviewFormRepository {
    async fn save(&self, mut form: ReviewForm) -> Result<ReviewForm, RepositoryError> {
        if form.id().is_none() {
            form.assign_id(self.next_id());
        }
        for question in form.questions_mut() {
            if question.id().is_none() {
                question.assign_id(self.next_question_id());
            }
        }
        let id = form.id().ok_or_else(|| {
            RepositoryError::Corrupted("review form id missing after assignment".into())
        })?;
        self.rows.write().await.insert(id, form.clone());
        Ok(form)
    }

    async fn find_by_id(&self, id: ReviewFormId) -> Result<Option<ReviewForm>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_code(
        &self,
        code: &FormCode,
    ) -> Result<Option<ReviewForm>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|f| f.code() == code)
            .cloned())
    }

    async fn code_exists(&self, code: &FormCode) -> Result<bool, RepositoryError> {
        Ok(self.rows.read().await.values().any(|f| f.code() == code))
    }

    async fn find_by_owner(
        &self,
        owner: MemberId,
        page: PageRequest,
    ) -> Result<Page<ReviewForm>, RepositoryError> {
        let mut forms: Vec<ReviewForm> = self
            .rows
            .read()
            .await
            .values()
            .filter(|f| f.owner_id() == owner)
            .cloned()
            .collect();
        forms.sort_by_key(|f| std::cmp::Reverse(f.updated_at()));
        Ok(Page::paginate(forms, page))
    }

    async fn find_all(&self) -> Result<Vec<ReviewForm>, RepositoryError> {
        let mut forms: Vec<ReviewForm> = self.rows.read().await.values().cloned().collect();
        forms.sort_by_key(|f| f.id());
        Ok(forms)
    }

    async fn delete(&self, id: ReviewFormId) -> Result<(), RepositoryError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }
}

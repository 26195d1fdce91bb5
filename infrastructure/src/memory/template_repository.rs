//! In-memory template repository.

use async_trait::async_trait;
use retroform_application::pagination::{Page, PageRequest};
use retroform_application::ports::{RepositoryError, TemplateRepository};
use retroform_domain::{MemberId, Owned, QuestionId, Template, TemplateId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Template store backed by a map guarded by an async lock.
///
/// Aggregates are stored whole: replacing a template on save replaces its
/// owned questions with it, so questions dropped by a reconciliation do not
/// survive the commit. A row-based adapter would use the removed-id list
/// instead.
#[derive(Default)]
pub struct InMemoryTemplateRepository {
    rows: RwLock<HashMap<TemplateId, Template>>,
    sequence: AtomicU64,
    question_sequence: AtomicU64,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> TemplateId {
        TemplateId::new(self.sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn next_question_id(&self) -> QuestionId {
        QuestionId::new(self.question_sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn save(&self, mut template: Template) -> Result<Template, RepositoryError> {
        if template.id().is_none() {
            template.assign_id(self.next_id());
        }
        for question in template.questions_mut() {
            if question.id().is_none() {
                question.assign_id(self.next_question_id());
            }
        }
        let id = template.id().ok_or_else(|| {
            RepositoryError::Corrupted("template id missing after assignment".into())
        })?;
        self.rows.write().await.insert(id, template.clone());
        Ok(template)
    }

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<Template>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: MemberId) -> Result<Vec<Template>, RepositoryError> {
        let mut templates: Vec<Template> = self
            .rows
            .read()
            .await
            .values()
            .filter(|t| t.owner_id() == owner)
            .cloned()
            .collect();
        templates.sort_by_key(|t| std::cmp::Reverse(t.updated_at()));
        Ok(templates)
    }

    async fn find_all_latest(
        &self,
        page: PageRequest,
    ) -> Result<Page<Template>, RepositoryError> {
        let mut templates: Vec<Template> = self.rows.read().await.values().cloned().collect();
        templates.sort_by_key(|t| std::cmp::Reverse(t.updated_at()));
        Ok(Page::paginate(templates, page))
    }

    async fn find_all_trending(
        &self,
        page: PageRequest,
    ) -> Result<Page<Template>, RepositoryError> {
        let mut templates: Vec<Template> = self.rows.read().await.values().cloned().collect();
        // ties broken by recency so fresh templates surface first
        templates.sort_by_key(|t| (std::cmp::Reverse(t.usage_count()), std::cmp::Reverse(t.updated_at())));
        Ok(Page::paginate(templates, page))
    }

    async fn increment_usage(&self, id: TemplateId) -> Result<(), RepositoryError> {
        if let Some(template) = self.rows.write().await.get_mut(&id) {
            template.record_usage();
        }
        Ok(())
    }

    async fn delete(&self, id: TemplateId) -> Result<(), RepositoryError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retroform_domain::QuestionSpec;

    fn template(owner: u64, title: &str) -> Template {
        Template::new(
            MemberId::new(owner),
            title,
            "",
            &[QuestionSpec::new("Q1", ""), QuestionSpec::new("Q2", "")],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_assigns_template_and_question_ids() {
        let repo = InMemoryTemplateRepository::new();
        let saved = repo.save(template(1, "Retro")).await.unwrap();

        assert_eq!(saved.id(), Some(TemplateId::new(1)));
        let ids: Vec<Option<QuestionId>> = saved.questions().iter().map(|q| q.id()).collect();
        assert_eq!(
            ids,
            vec![Some(QuestionId::new(1)), Some(QuestionId::new(2))]
        );
    }

    #[tokio::test]
    async fn existing_question_ids_are_not_reassigned() {
        let repo = InMemoryTemplateRepository::new();
        let mut saved = repo.save(template(1, "Retro")).await.unwrap();
        let first_id = saved.questions()[0].id();

        saved
            .update(
                "Retro",
                "",
                &[
                    retroform_domain::QuestionEdit::keep(first_id.unwrap(), "Q1", ""),
                    retroform_domain::QuestionEdit::add("Q3", ""),
                ],
            )
            .unwrap();
        let resaved = repo.save(saved).await.unwrap();

        assert_eq!(resaved.questions()[0].id(), first_id);
        // the new question continues the sequence
        assert_eq!(resaved.questions()[1].id(), Some(QuestionId::new(3)));
    }

    #[tokio::test]
    async fn trending_orders_by_usage() {
        let repo = InMemoryTemplateRepository::new();
        let quiet = repo.save(template(1, "Quiet")).await.unwrap();
        let popular = repo.save(template(1, "Popular")).await.unwrap();
        for _ in 0..3 {
            repo.increment_usage(popular.id().unwrap()).await.unwrap();
        }

        let page = repo
            .find_all_trending(PageRequest::new(0, 10))
            .await
            .unwrap();
        assert_eq!(page.items[0].id(), popular.id());
        assert_eq!(page.items[1].id(), quiet.id());
        assert_eq!(page.items[0].usage_count(), 3);
    }

    #[tokio::test]
    async fn latest_orders_by_update_time() {
        let repo = InMemoryTemplateRepository::new();
        let old = repo.save(template(1, "Old")).await.unwrap();
        let mut fresh = repo.save(template(1, "Fresh")).await.unwrap();
        fresh.update("Fresh v2", "", &[]).unwrap();
        let fresh = repo.save(fresh).await.unwrap();

        let page = repo.find_all_latest(PageRequest::new(0, 10)).await.unwrap();
        assert_eq!(page.items[0].id(), fresh.id());
        assert_eq!(page.items[1].id(), old.id());
    }

    #[tokio::test]
    async fn delete_removes_the_aggregate() {
        let repo = InMemoryTemplateRepository::new();
        let saved = repo.save(template(1, "Retro")).await.unwrap();

        repo.delete(saved.id().unwrap()).await.unwrap();
        assert!(repo.find_by_id(saved.id().unwrap()).await.unwrap().is_none());
    }
}

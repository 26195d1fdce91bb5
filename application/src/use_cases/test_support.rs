//! In-memory mock ports shared by the use-case tests.
//!
//! Deliberately minimal: enough bookkeeping to drive the services, no
//! concurrency story. The production-grade adapters live in the
//! infrastructure crate.

use crate::pagination::{Page, PageRequest};
use crate::ports::{
    AuditEvent, AuditLogger, MemberRepository, RepositoryError, ReviewFormRepository,
    ReviewRepository, TemplateRepository,
};
use async_trait::async_trait;
use retroform_domain::{
    FormCode, Member, MemberId, Owned, QuestionId, Review, ReviewForm, ReviewFormId, ReviewId,
    Template, TemplateId,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

fn next(seq: &AtomicU64) -> u64 {
    seq.fetch_add(1, Ordering::Relaxed) + 1
}

#[derive(Default)]
pub struct MockMembers {
    rows: Mutex<HashMap<MemberId, Member>>,
    seq: AtomicU64,
}

#[async_trait]
impl MemberRepository for MockMembers {
    async fn save(&self, mut member: Member) -> Result<Member, RepositoryError> {
        if member.id().is_none() {
            member.assign_id(MemberId::new(next(&self.seq)));
        }
        let id = member.id().unwrap();
        self.rows.lock().unwrap().insert(id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_social_id(&self, social_id: &str) -> Result<Option<Member>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|m| m.social_id() == social_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, RepositoryError> {
        let mut members: Vec<Member> = self.rows.lock().unwrap().values().cloned().collect();
        members.sort_by_key(|m| m.id());
        Ok(members)
    }
}

#[derive(Default)]
pub struct MockTemplates {
    rows: Mutex<HashMap<TemplateId, Template>>,
    seq: AtomicU64,
    question_seq: AtomicU64,
}

#[async_trait]
impl TemplateRepository for MockTemplates {
    async fn save(&self, mut template: Template) -> Result<Template, RepositoryError> {
        if template.id().is_none() {
            template.assign_id(TemplateId::new(next(&self.seq)));
        }
        for question in template.questions_mut() {
            if question.id().is_none() {
                question.assign_id(QuestionId::new(next(&self.question_seq)));
            }
        }
        let id = template.id().unwrap();
        self.rows.lock().unwrap().insert(id, template.clone());
        Ok(template)
    }

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<Template>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: MemberId) -> Result<Vec<Template>, RepositoryError> {
        let mut templates: Vec<Template> = self
            .rows
            .lock()
            .unwrap()
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
        let mut templates: Vec<Template> = self.rows.lock().unwrap().values().cloned().collect();
        templates.sort_by_key(|t| std::cmp::Reverse(t.updated_at()));
        Ok(Page::paginate(templates, page))
    }

    async fn find_all_trending(
        &self,
        page: PageRequest,
    ) -> Result<Page<Template>, RepositoryError> {
        let mut templates: Vec<Template> = self.rows.lock().unwrap().values().cloned().collect();
        templates.sort_by_key(|t| std::cmp::Reverse(t.usage_count()));
        Ok(Page::paginate(templates, page))
    }

    async fn increment_usage(&self, id: TemplateId) -> Result<(), RepositoryError> {
        if let Some(template) = self.rows.lock().unwrap().get_mut(&id) {
            template.record_usage();
        }
        Ok(())
    }

    async fn delete(&self, id: TemplateId) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockForms {
    rows: Mutex<HashMap<ReviewFormId, ReviewForm>>,
    seq: AtomicU64,
    question_seq: AtomicU64,
    /// Pretend this many `code_exists` calls hit a persisted code.
    pub forced_collisions: AtomicU64,
}

#[async_trait]
impl ReviewFormRepository for MockForms {
    async fn save(&self, mut form: ReviewForm) -> Result<ReviewForm, RepositoryError> {
        if form.id().is_none() {
            form.assign_id(ReviewFormId::new(next(&self.seq)));
        }
        for question in form.questions_mut() {
            if question.id().is_none() {
                question.assign_id(QuestionId::new(next(&self.question_seq)));
            }
        }
        let id = form.id().unwrap();
        self.rows.lock().unwrap().insert(id, form.clone());
        Ok(form)
    }

    async fn find_by_id(&self, id: ReviewFormId) -> Result<Option<ReviewForm>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_code(
        &self,
        code: &FormCode,
    ) -> Result<Option<ReviewForm>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|f| f.code() == code)
            .cloned())
    }

    async fn code_exists(&self, code: &FormCode) -> Result<bool, RepositoryError> {
        let forced = self.forced_collisions.load(Ordering::Relaxed);
        if forced > 0 {
            self.forced_collisions.store(forced - 1, Ordering::Relaxed);
            return Ok(true);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .any(|f| f.code() == code))
    }

    async fn find_by_owner(
        &self,
        owner: MemberId,
        page: PageRequest,
    ) -> Result<Page<ReviewForm>, RepositoryError> {
        let mut forms: Vec<ReviewForm> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|f| f.owner_id() == owner)
            .cloned()
            .collect();
        forms.sort_by_key(|f| std::cmp::Reverse(f.updated_at()));
        Ok(Page::paginate(forms, page))
    }

    async fn find_all(&self) -> Result<Vec<ReviewForm>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: ReviewFormId) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockReviews {
    rows: Mutex<HashMap<ReviewId, Review>>,
    seq: AtomicU64,
}

#[async_trait]
impl ReviewRepository for MockReviews {
    async fn save(&self, mut review: Review) -> Result<Review, RepositoryError> {
        if review.id().is_none() {
            review.assign_id(ReviewId::new(next(&self.seq)));
        }
        let id = review.id().unwrap();
        self.rows.lock().unwrap().insert(id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_form(
        &self,
        form: ReviewFormId,
        page: PageRequest,
    ) -> Result<Page<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .rows
            .lock()
            .unwrap()
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
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.owner_id() == owner)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| std::cmp::Reverse(r.updated_at()));
        Ok(reviews)
    }

    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_participant_ids(
        &self,
        form: ReviewFormId,
    ) -> Result<Vec<MemberId>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .rows
            .lock()
            .unwrap()
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
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn delete_by_form(&self, form: ReviewFormId) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, r| r.form_id() != form);
        Ok((before - rows.len()) as u64)
    }
}

/// Audit logger that captures events for assertions.
#[derive(Default)]
pub struct CapturingAudit {
    pub events: Mutex<Vec<AuditEvent>>,
}

impl AuditLogger for CapturingAudit {
    fn log(&self, event: AuditEvent) {
        self.events.lock().unwrap().push(event);
    }
}

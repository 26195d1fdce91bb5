//! Review submission use cases.

use super::ServiceError;
use crate::config::ServiceConfig;
use crate::pagination::{Page, PageRequest};
use crate::ports::{MemberRepository, ReviewFormRepository, ReviewRepository};
use retroform_domain::{
    FormCode, Member, MemberId, QuestionAnswer, Review, ReviewForm, ReviewId, assert_owner,
};
use std::sync::Arc;
use tracing::info;

/// Use cases around submitted reviews.
///
/// Answers are validated against the target form: every answer must
/// reference a question that belongs to that form, so a stale or foreign
/// question id is rejected instead of silently stored.
pub struct ReviewService<R, F, M>
where
    R: ReviewRepository,
    F: ReviewFormRepository,
    M: MemberRepository,
{
    reviews: Arc<R>,
    forms: Arc<F>,
    members: Arc<M>,
    config: ServiceConfig,
}

impl<R, F, M> ReviewService<R, F, M>
where
    R: ReviewRepository,
    F: ReviewFormRepository,
    M: MemberRepository,
{
    pub fn new(reviews: Arc<R>, forms: Arc<F>, members: Arc<M>) -> Self {
        Self {
            reviews,
            forms,
            members,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Submit a review against the form with the given code.
    pub async fn submit(
        &self,
        acting: MemberId,
        code: &str,
        title: impl Into<String>,
        answers: Vec<QuestionAnswer>,
    ) -> Result<Review, ServiceError> {
        let form = self.find_form(code).await?;
        validate_answers(&form, &answers)?;

        // find_form only returns persisted forms
        let Some(form_id) = form.id() else {
            return Err(ServiceError::not_found("review form does not exist"));
        };
        let review = Review::new(acting, form_id, title, answers)?;
        let review = self.reviews.save(review).await?;
        info!("Member {} submitted a review for form {}", acting, code);
        Ok(review)
    }

    /// Reviews submitted against a form, most recently updated first.
    pub async fn find_by_form(
        &self,
        code: &str,
        page: PageRequest,
    ) -> Result<Page<Review>, ServiceError> {
        let form = self.find_form(code).await?;
        let Some(form_id) = form.id() else {
            return Err(ServiceError::not_found("review form does not exist"));
        };
        let page = page.clamped(self.config.max_page_size);
        Ok(self.reviews.find_by_form(form_id, page).await?)
    }

    /// The acting member's own reviews, most recently updated first.
    pub async fn find_my_reviews(&self, acting: MemberId) -> Result<Vec<Review>, ServiceError> {
        Ok(self.reviews.find_by_owner(acting).await?)
    }

    /// Members who submitted at least one review to the form.
    pub async fn find_participants(&self, code: &str) -> Result<Vec<Member>, ServiceError> {
        let form = self.find_form(code).await?;
        let Some(form_id) = form.id() else {
            return Err(ServiceError::not_found("review form does not exist"));
        };
        let ids = self.reviews.find_participant_ids(form_id).await?;
        let mut participants = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(member) = self.members.find_by_id(id).await? {
                participants.push(member);
            }
        }
        Ok(participants)
    }

    /// Replace a review's title and answers.
    pub async fn update(
        &self,
        acting: MemberId,
        id: ReviewId,
        title: impl Into<String>,
        answers: Vec<QuestionAnswer>,
    ) -> Result<Review, ServiceError> {
        let mut review = self.find_by_id(id).await?;
        assert_owner(&review, acting, "only the review's author can update it")?;

        let form = self
            .forms
            .find_by_id(review.form_id())
            .await?
            .ok_or_else(|| ServiceError::not_found("review form does not exist"))?;
        validate_answers(&form, &answers)?;

        review.update(title, answers)?;
        Ok(self.reviews.save(review).await?)
    }

    pub async fn delete(&self, acting: MemberId, id: ReviewId) -> Result<(), ServiceError> {
        let review = self.find_by_id(id).await?;
        assert_owner(&review, acting, "only the review's author can delete it")?;

        self.reviews.delete(id).await?;
        info!("Member {} deleted review {}", acting, id);
        Ok(())
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Review, ServiceError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("review does not exist"))
    }

    async fn find_form(&self, code: &str) -> Result<ReviewForm, ServiceError> {
        let code = FormCode::parse(code)?;
        self.forms
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ServiceError::not_found("review form does not exist"))
    }
}

fn validate_answers(form: &ReviewForm, answers: &[QuestionAnswer]) -> Result<(), ServiceError> {
    for answer in answers {
        if !form.contains_question(answer.question_id()) {
            return Err(ServiceError::not_found(format!(
                "question {} does not belong to review form {}",
                answer.question_id(),
                form.code()
            )));
        }
    }
    Ok(())
}

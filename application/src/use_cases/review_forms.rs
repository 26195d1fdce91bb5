//! Review form management use cases.
//!
//! Forms are addressed by their public [`FormCode`] everywhere below; the
//! internal id never leaves this layer. Code allocation is the one place in
//! the system with a retry: generation is random, uniqueness is checked
//! against the authoritative store, and a bounded number of collisions is
//! absorbed before giving up with a conflict.

use super::ServiceError;
use crate::config::ServiceConfig;
use crate::pagination::{Page, PageRequest};
use crate::ports::{ReviewFormRepository, ReviewRepository, TemplateRepository};
use retroform_domain::{
    FormCode, MemberId, QuestionEdit, QuestionSpec, ReviewForm, TemplateId, assert_owner,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use cases around review forms.
pub struct ReviewFormService<F, T, R>
where
    F: ReviewFormRepository,
    T: TemplateRepository,
    R: ReviewRepository,
{
    forms: Arc<F>,
    templates: Arc<T>,
    reviews: Arc<R>,
    config: ServiceConfig,
}

impl<F, T, R> ReviewFormService<F, T, R>
where
    F: ReviewFormRepository,
    T: TemplateRepository,
    R: ReviewRepository,
{
    pub fn new(forms: Arc<F>, templates: Arc<T>, reviews: Arc<R>) -> Self {
        Self {
            forms,
            templates,
            reviews,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Create a review form with its initial questions.
    pub async fn create(
        &self,
        owner: MemberId,
        title: impl Into<String>,
        description: impl Into<String>,
        specs: &[QuestionSpec],
    ) -> Result<ReviewForm, ServiceError> {
        let code = self.allocate_code().await?;
        let form = ReviewForm::new(owner, code, title, description, specs)?;
        let form = self.forms.save(form).await?;
        info!("Member {} created review form {}", owner, form.code());
        Ok(form)
    }

    /// Create a review form from a template's questions.
    ///
    /// Copies the template's title, description and questions, and records
    /// one more use of the template.
    pub async fn create_from_template(
        &self,
        owner: MemberId,
        template_id: TemplateId,
    ) -> Result<ReviewForm, ServiceError> {
        let template = self
            .templates
            .find_by_id(template_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("template does not exist"))?;

        let code = self.allocate_code().await?;
        let form = ReviewForm::from_template(owner, code, &template)?;
        let form = self.forms.save(form).await?;
        self.templates.increment_usage(template_id).await?;
        info!(
            "Member {} created review form {} from template {}",
            owner,
            form.code(),
            template_id
        );
        Ok(form)
    }

    /// Look up a form by its public code.
    pub async fn find_by_code(&self, code: &str) -> Result<ReviewForm, ServiceError> {
        let code = FormCode::parse(code)?;
        self.forms
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ServiceError::not_found("review form does not exist"))
    }

    /// A member's forms, most recently updated first.
    pub async fn find_by_owner(
        &self,
        owner: MemberId,
        page: PageRequest,
    ) -> Result<Page<ReviewForm>, ServiceError> {
        let page = page.clamped(self.config.max_page_size);
        Ok(self.forms.find_by_owner(owner, page).await?)
    }

    /// Update title, description and questions in one request.
    pub async fn update(
        &self,
        acting: MemberId,
        code: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        edits: &[QuestionEdit],
    ) -> Result<ReviewForm, ServiceError> {
        let mut form = self.find_by_code(code).await?;
        assert_owner(&form, acting, "only the form's creator can update it")?;

        let removed = form.update(title, description, edits)?;
        if !removed.is_empty() {
            debug!(
                "Review form {} update removes {} questions",
                form.code(),
                removed.len()
            );
        }
        Ok(self.forms.save(form).await?)
    }

    /// Delete a form, its questions and every review submitted against it.
    pub async fn delete(&self, acting: MemberId, code: &str) -> Result<(), ServiceError> {
        let form = self.find_by_code(code).await?;
        assert_owner(&form, acting, "only the form's creator can delete it")?;

        if let Some(id) = form.id() {
            let removed_reviews = self.reviews.delete_by_form(id).await?;
            self.forms.delete(id).await?;
            info!(
                "Member {} deleted review form {} and {} of its reviews",
                acting,
                form.code(),
                removed_reviews
            );
        }
        Ok(())
    }

    /// Allocate a code no persisted form uses yet.
    ///
    /// Retries with fresh random codes up to the configured bound; the
    /// store is consulted on every attempt so two allocators racing for the
    /// same code are caught at commit time by the adapter's uniqueness
    /// check.
    async fn allocate_code(&self) -> Result<FormCode, ServiceError> {
        for attempt in 1..=self.config.code_max_attempts {
            let candidate = FormCode::random();
            if !self.forms.code_exists(&candidate).await? {
                return Ok(candidate);
            }
            warn!(
                "Form code collision on attempt {}/{}",
                attempt, self.config.code_max_attempts
            );
        }
        Err(ServiceError::conflict("could not allocate unique code"))
    }
}

//! Template management use cases.

use super::ServiceError;
use crate::config::ServiceConfig;
use crate::pagination::{Page, PageRequest};
use crate::ports::TemplateRepository;
use retroform_domain::{
    MemberId, QuestionEdit, QuestionSpec, Template, TemplateId, assert_owner,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Use cases around review-form templates.
///
/// Mutations are gated to the template's creator; reads are open to any
/// member.
pub struct TemplateService<T: TemplateRepository> {
    templates: Arc<T>,
    config: ServiceConfig,
}

impl<T: TemplateRepository> TemplateService<T> {
    pub fn new(templates: Arc<T>) -> Self {
        Self {
            templates,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Create a template with its initial questions.
    pub async fn create(
        &self,
        owner: MemberId,
        title: impl Into<String>,
        description: impl Into<String>,
        specs: &[QuestionSpec],
    ) -> Result<Template, ServiceError> {
        let template = Template::new(owner, title, description, specs)?;
        let template = self.templates.save(template).await?;
        if let Some(id) = template.id() {
            info!("Member {} created template {}", owner, id);
        }
        Ok(template)
    }

    pub async fn find_by_id(&self, id: TemplateId) -> Result<Template, ServiceError> {
        self.templates
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("template does not exist"))
    }

    /// A member's templates, most recently updated first.
    pub async fn find_by_owner(&self, owner: MemberId) -> Result<Vec<Template>, ServiceError> {
        Ok(self.templates.find_by_owner(owner).await?)
    }

    /// All templates, most recently updated first.
    pub async fn list_latest(&self, page: PageRequest) -> Result<Page<Template>, ServiceError> {
        let page = page.clamped(self.config.max_page_size);
        Ok(self.templates.find_all_latest(page).await?)
    }

    /// All templates, most used first.
    pub async fn list_trending(&self, page: PageRequest) -> Result<Page<Template>, ServiceError> {
        let page = page.clamped(self.config.max_page_size);
        Ok(self.templates.find_all_trending(page).await?)
    }

    /// Update title, description and questions in one request.
    pub async fn update(
        &self,
        acting: MemberId,
        id: TemplateId,
        title: impl Into<String>,
        description: impl Into<String>,
        edits: &[QuestionEdit],
    ) -> Result<Template, ServiceError> {
        let mut template = self.find_by_id(id).await?;
        assert_owner(
            &template,
            acting,
            "only the template's creator can update it",
        )?;

        let removed = template.update(title, description, edits)?;
        if !removed.is_empty() {
            debug!("Template {} update removes {} questions", id, removed.len());
        }
        Ok(self.templates.save(template).await?)
    }

    pub async fn delete(&self, acting: MemberId, id: TemplateId) -> Result<(), ServiceError> {
        let template = self.find_by_id(id).await?;
        assert_owner(
            &template,
            acting,
            "only the template's creator can delete it",
        )?;

        self.templates.delete(id).await?;
        info!("Member {} deleted template {}", acting, id);
        Ok(())
    }
}

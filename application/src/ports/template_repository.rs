//! Template repository port.

use super::RepositoryError;
use crate::pagination::{Page, PageRequest};
use async_trait::async_trait;
use retroform_domain::{MemberId, Template, TemplateId};

/// Persistence port for templates.
///
/// `save` assigns ids at commit time: a fresh template id when the
/// aggregate has none, and question ids for every owned question still
/// carrying `None`. Questions dropped by a reconciliation are simply no
/// longer part of the saved aggregate and must not survive the commit.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn save(&self, template: Template) -> Result<Template, RepositoryError>;

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<Template>, RepositoryError>;

    /// A member's templates, most recently updated first.
    async fn find_by_owner(&self, owner: MemberId) -> Result<Vec<Template>, RepositoryError>;

    /// All templates, most recently updated first.
    async fn find_all_latest(&self, page: PageRequest)
    -> Result<Page<Template>, RepositoryError>;

    /// All templates, most used first.
    async fn find_all_trending(
        &self,
        page: PageRequest,
    ) -> Result<Page<Template>, RepositoryError>;

    /// Record one more review form created from this template.
    async fn increment_usage(&self, id: TemplateId) -> Result<(), RepositoryError>;

    /// Delete the template and, with it, its owned questions.
    async fn delete(&self, id: TemplateId) -> Result<(), RepositoryError>;
}

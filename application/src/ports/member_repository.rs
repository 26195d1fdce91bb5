//! Member repository port.

use super::RepositoryError;
use async_trait::async_trait;
use retroform_domain::{Member, MemberId};

/// Persistence port for members.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Commit a member, assigning an id when the entity has none yet.
    async fn save(&self, member: Member) -> Result<Member, RepositoryError>;

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError>;

    /// Look up by the external identity key.
    async fn find_by_social_id(&self, social_id: &str) -> Result<Option<Member>, RepositoryError>;

    /// All members, oldest first. Admin surface only.
    async fn find_all(&self) -> Result<Vec<Member>, RepositoryError>;
}

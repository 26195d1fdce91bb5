//! In-memory member repository.

use async_trait::async_trait;
use retroform_application::ports::{MemberRepository, RepositoryError};
use retroform_domain::{Member, MemberId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Member store backed by a map guarded by an async lock.
///
/// Ids are assigned at save time, standing in for the database's identity
/// column.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    rows: RwLock<HashMap<MemberId, Member>>,
    sequence: AtomicU64,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> MemberId {
        MemberId::new(self.sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, mut member: Member) -> Result<Member, RepositoryError> {
        if member.id().is_none() {
            member.assign_id(self.next_id());
        }
        let id = member
            .id()
            .ok_or_else(|| RepositoryError::Corrupted("member id missing after assignment".into()))?;
        self.rows.write().await.insert(id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_social_id(&self, social_id: &str) -> Result<Option<Member>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|m| m.social_id() == social_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, RepositoryError> {
        let mut members: Vec<Member> = self.rows.read().await.values().cloned().collect();
        members.sort_by_key(|m| m.id());
        Ok(members)
    }
}

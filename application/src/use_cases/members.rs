//! Member management use cases.

use super::ServiceError;
use crate::ports::MemberRepository;
use retroform_domain::{Member, MemberId};
use std::sync::Arc;
use tracing::info;

/// Use cases around members.
///
/// Authentication itself is the identity provider's job; by the time these
/// run, the acting member's id is already established.
pub struct MemberService<M: MemberRepository> {
    members: Arc<M>,
}

impl<M: MemberRepository> MemberService<M> {
    pub fn new(members: Arc<M>) -> Self {
        Self { members }
    }

    /// Register a member under a new social id.
    pub async fn register(
        &self,
        social_id: impl Into<String>,
        nickname: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Result<Member, ServiceError> {
        let social_id = social_id.into();
        if self.members.find_by_social_id(&social_id).await?.is_some() {
            return Err(ServiceError::conflict(
                "member with this social id already exists",
            ));
        }

        let member = Member::new(social_id, nickname, profile_url)?;
        let member = self.members.save(member).await?;
        if let Some(id) = member.id() {
            info!("Registered member {} ({})", id, member.social_id());
        }
        Ok(member)
    }

    pub async fn get_by_id(&self, id: MemberId) -> Result<Member, ServiceError> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("member does not exist"))
    }

    pub async fn get_by_social_id(&self, social_id: &str) -> Result<Member, ServiceError> {
        self.members
            .find_by_social_id(social_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("member does not exist"))
    }

    /// Change the acting member's own nickname.
    pub async fn update_nickname(
        &self,
        acting: MemberId,
        nickname: impl Into<String>,
    ) -> Result<Member, ServiceError> {
        let mut member = self.get_by_id(acting).await?;
        member.update_nickname(nickname)?;
        Ok(self.members.save(member).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MockMembers;

    fn service() -> MemberService<MockMembers> {
        MemberService::new(Arc::new(MockMembers::default()))
    }

    #[tokio::test]
    async fn register_and_look_up() {
        let service = service();
        let member = service
            .register("github-1", "duck", "https://example.com/a.png")
            .await
            .unwrap();

        assert!(member.id().is_some());
        let found = service.get_by_social_id("github-1").await.unwrap();
        assert_eq!(found.id(), member.id());
    }

    #[tokio::test]
    async fn duplicate_social_id_is_a_conflict() {
        let service = service();
        service.register("github-1", "duck", "").await.unwrap();

        let err = service.register("github-1", "goose", "").await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn update_nickname_persists() {
        let service = service();
        let member = service.register("github-1", "duck", "").await.unwrap();

        let updated = service
            .update_nickname(member.id().unwrap(), "mallard")
            .await
            .unwrap();
        assert_eq!(updated.nickname(), "mallard");

        let found = service.get_by_id(member.id().unwrap()).await.unwrap();
        assert_eq!(found.nickname(), "mallard");
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let err = service().get_by_id(MemberId::new(404)).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

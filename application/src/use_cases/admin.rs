//! Admin use cases.
//!
//! The admin surface lists and deletes members, review forms and reviews
//! across all owners. Role checks happen upstream in the identity layer;
//! nothing here applies the ownership guard. Every mutation is recorded
//! through the [`AuditLogger`] port.

use super::ServiceError;
use crate::ports::{
    AuditEvent, AuditLogger, MemberRepository, ReviewFormRepository, ReviewRepository,
};
use retroform_domain::{FormCode, Member, MemberId, Review, ReviewForm, ReviewId};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Cross-owner administration of members, forms and reviews.
pub struct AdminService<M, F, R>
where
    M: MemberRepository,
    F: ReviewFormRepository,
    R: ReviewRepository,
{
    members: Arc<M>,
    forms: Arc<F>,
    reviews: Arc<R>,
    audit: Arc<dyn AuditLogger>,
}

impl<M, F, R> AdminService<M, F, R>
where
    M: MemberRepository,
    F: ReviewFormRepository,
    R: ReviewRepository,
{
    pub fn new(members: Arc<M>, forms: Arc<F>, reviews: Arc<R>, audit: Arc<dyn AuditLogger>) -> Self {
        Self {
            members,
            forms,
            reviews,
            audit,
        }
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, ServiceError> {
        Ok(self.members.find_all().await?)
    }

    pub async fn list_review_forms(&self) -> Result<Vec<ReviewForm>, ServiceError> {
        Ok(self.forms.find_all().await?)
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        Ok(self.reviews.find_all().await?)
    }

    pub async fn reviews_by_member(&self, member: MemberId) -> Result<Vec<Review>, ServiceError> {
        if self.members.find_by_id(member).await?.is_none() {
            return Err(ServiceError::not_found("member does not exist"));
        }
        Ok(self.reviews.find_by_owner(member).await?)
    }

    /// Erase a member's profile while keeping the row, so their reviews
    /// remain attributable to a blanked author.
    pub async fn delete_member(&self, member: MemberId) -> Result<(), ServiceError> {
        let mut row = self
            .members
            .find_by_id(member)
            .await?
            .ok_or_else(|| ServiceError::not_found("member does not exist"))?;

        row.erase_profile();
        self.members.save(row).await?;
        info!("Admin erased member {}", member);
        self.audit.log(AuditEvent::new(
            "member_deleted",
            json!({ "member_id": member }),
        ));
        Ok(())
    }

    /// Delete a form, its questions and every review submitted against it.
    pub async fn delete_review_form(&self, code: &str) -> Result<(), ServiceError> {
        let code = FormCode::parse(code)?;
        let form = self
            .forms
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ServiceError::not_found("review form does not exist"))?;

        let mut removed_reviews = 0;
        if let Some(id) = form.id() {
            removed_reviews = self.reviews.delete_by_form(id).await?;
            self.forms.delete(id).await?;
        }
        info!(
            "Admin deleted review form {} and {} of its reviews",
            code, removed_reviews
        );
        self.audit.log(AuditEvent::new(
            "review_form_deleted",
            json!({ "code": code.as_str(), "removed_reviews": removed_reviews }),
        ));
        Ok(())
    }

    pub async fn delete_review(&self, review: ReviewId) -> Result<(), ServiceError> {
        if self.reviews.find_by_id(review).await?.is_none() {
            return Err(ServiceError::not_found("review does not exist"));
        }

        self.reviews.delete(review).await?;
        info!("Admin deleted review {}", review);
        self.audit.log(AuditEvent::new(
            "review_deleted",
            json!({ "review_id": review }),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{
        CapturingAudit, MockForms, MockMembers, MockReviews,
    };
    use retroform_domain::QuestionSpec;

    struct Fixture {
        members: Arc<MockMembers>,
        forms: Arc<MockForms>,
        reviews: Arc<MockReviews>,
        audit: Arc<CapturingAudit>,
        service: AdminService<MockMembers, MockForms, MockReviews>,
    }

    fn fixture() -> Fixture {
        let members = Arc::new(MockMembers::default());
        let forms = Arc::new(MockForms::default());
        let reviews = Arc::new(MockReviews::default());
        let audit = Arc::new(CapturingAudit::default());
        let service = AdminService::new(
            Arc::clone(&members),
            Arc::clone(&forms),
            Arc::clone(&reviews),
            Arc::clone(&audit) as Arc<dyn AuditLogger>,
        );
        Fixture {
            members,
            forms,
            reviews,
            audit,
            service,
        }
    }

    #[tokio::test]
    async fn delete_member_erases_profile_and_audits() {
        let fixture = fixture();
        let member = fixture
            .members
            .save(Member::new("social-1", "duck", "https://example.com/a.png").unwrap())
            .await
            .unwrap();

        fixture
            .service
            .delete_member(member.id().unwrap())
            .await
            .unwrap();

        let row = fixture
            .members
            .find_by_id(member.id().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.nickname(), "");
        assert_eq!(row.social_id(), "social-1");

        let events = fixture.audit.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "member_deleted");
    }

    #[tokio::test]
    async fn delete_review_form_removes_its_reviews() {
        let fixture = fixture();
        let form = fixture
            .forms
            .save(
                ReviewForm::new(
                    MemberId::new(1),
                    FormCode::random(),
                    "Retro",
                    "",
                    &[QuestionSpec::new("Q", "")],
                )
                .unwrap(),
            )
            .await
            .unwrap();
        for _ in 0..2 {
            fixture
                .reviews
                .save(
                    Review::new(MemberId::new(2), form.id().unwrap(), "week", vec![]).unwrap(),
                )
                .await
                .unwrap();
        }

        fixture
            .service
            .delete_review_form(form.code().as_str())
            .await
            .unwrap();

        assert!(fixture.service.list_review_forms().await.unwrap().is_empty());
        assert!(fixture.service.list_reviews().await.unwrap().is_empty());

        let events = fixture.audit.events.lock().unwrap();
        assert_eq!(events[0].event_type, "review_form_deleted");
        assert_eq!(events[0].payload["removed_reviews"], 2);
    }

    #[tokio::test]
    async fn reviews_by_unknown_member_is_not_found() {
        let fixture = fixture();
        let err = fixture
            .service
            .reviews_by_member(MemberId::new(404))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_unknown_review_is_not_found() {
        let fixture = fixture();
        let err = fixture
            .service
            .delete_review(ReviewId::new(404))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

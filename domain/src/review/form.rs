//! Review form aggregate.

use crate::core::error::DomainError;
use crate::core::id::{MemberId, QuestionId, ReviewFormId};
use crate::core::ownership::Owned;
use crate::question::entities::Question;
use crate::question::reconcile::reconcile;
use crate::question::value_objects::{QuestionEdit, QuestionSpec};
use crate::review::value_objects::FormCode;
use crate::template::entities::Template;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::template::entities::MAX_TITLE_LEN;

/// A review form members answer against (Aggregate Root)
///
/// Shares the ownership and question rules of
/// [`Template`](crate::template::entities::Template); additionally carries
/// the public [`FormCode`] under which reviews are submitted. The code is
/// allocated once at creation and survives updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewForm {
    id: Option<ReviewFormId>,
    owner: MemberId,
    code: FormCode,
    title: String,
    description: String,
    questions: Vec<Question>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReviewForm {
    /// Create a review form with its initial questions.
    pub fn new(
        owner: MemberId,
        code: FormCode,
        title: impl Into<String>,
        description: impl Into<String>,
        specs: &[QuestionSpec],
    ) -> Result<Self, DomainError> {
        let title = title.into();
        validate_title(&title)?;

        let mut questions = Vec::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            let mut question = Question::new(spec.value(), spec.description())?;
            question.set_position(position);
            questions.push(question);
        }

        let now = Utc::now();
        Ok(Self {
            id: None,
            owner,
            code,
            title,
            description: description.into(),
            questions,
            created_at: now,
            updated_at: now,
        })
    }

    /// Create a review form that copies a template's questions.
    ///
    /// The copies are fresh, unpersisted questions; editing the form later
    /// never touches the template.
    pub fn from_template(
        owner: MemberId,
        code: FormCode,
        template: &Template,
    ) -> Result<Self, DomainError> {
        let specs: Vec<QuestionSpec> = template
            .questions()
            .iter()
            .map(|q| QuestionSpec::new(q.value(), q.description()))
            .collect();
        Self::new(owner, code, template.title(), template.description(), &specs)
    }

    /// Update title, description and the owned question list.
    ///
    /// Returns ids of persisted questions dropped by the edit list; see
    /// [`Template::update`](crate::template::entities::Template::update).
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        edits: &[QuestionEdit],
    ) -> Result<Vec<QuestionId>, DomainError> {
        let title = title.into();
        validate_title(&title)?;

        let outcome = reconcile(std::mem::take(&mut self.questions), edits)?;
        self.questions = outcome.questions;
        self.title = title;
        self.description = description.into();
        self.updated_at = Utc::now();
        Ok(outcome.removed)
    }

    pub fn id(&self) -> Option<ReviewFormId> {
        self.id
    }

    pub fn code(&self) -> &FormCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Whether the given persisted question belongs to this form.
    ///
    /// Reviews may only answer questions of the form they target.
    pub fn contains_question(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id() == Some(id))
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Called by the persistence collaborator when the row is committed.
    pub fn assign_id(&mut self, id: ReviewFormId) {
        self.id = Some(id);
    }

    /// Mutable access for the persistence collaborator to assign question
    /// ids at commit time.
    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }
}

impl Owned for ReviewForm {
    fn owner_id(&self) -> MemberId {
        self.owner
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation(
            "review form title must not be blank",
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::validation(format!(
            "review form title must not exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ReviewForm {
        ReviewForm::new(
            MemberId::new(1),
            FormCode::random(),
            "Weekly retro",
            "",
            &[
                QuestionSpec::new("What went well?", ""),
                QuestionSpec::new("What blocked you?", ""),
            ],
        )
        .unwrap()
    }

    #[test]
    fn create_positions_questions_in_spec_order() {
        let form = form();
        assert_eq!(form.questions()[0].position(), 0);
        assert_eq!(form.questions()[1].position(), 1);
        assert_eq!(form.id(), None);
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = ReviewForm::new(MemberId::new(1), FormCode::random(), " ", "", &[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn from_template_copies_questions_as_fresh_ones() {
        let mut template = Template::new(
            MemberId::new(1),
            "Team health check",
            "monthly",
            &[QuestionSpec::new("Morale?", "1-5")],
        )
        .unwrap();
        template.questions_mut()[0].assign_id(QuestionId::new(9));

        let form =
            ReviewForm::from_template(MemberId::new(2), FormCode::random(), &template).unwrap();

        assert_eq!(form.title(), "Team health check");
        assert_eq!(form.questions().len(), 1);
        assert_eq!(form.questions()[0].value(), "Morale?");
        // a copy, not the template's persisted question
        assert_eq!(form.questions()[0].id(), None);
        assert!(form.is_owned_by(MemberId::new(2)));
    }

    #[test]
    fn update_keeps_the_code() {
        let mut form = form();
        let code = form.code().clone();
        form.update("Weekly retro v2", "", &[QuestionEdit::add("Kudos", "")])
            .unwrap();
        assert_eq!(form.code(), &code);
        assert_eq!(form.questions().len(), 1);
    }

    #[test]
    fn contains_question_only_sees_persisted_own_questions() {
        let mut form = form();
        form.questions_mut()[0].assign_id(QuestionId::new(4));

        assert!(form.contains_question(QuestionId::new(4)));
        assert!(!form.contains_question(QuestionId::new(5)));
    }
}

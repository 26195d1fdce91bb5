//! Template aggregate.

use crate::core::error::DomainError;
use crate::core::id::{MemberId, QuestionId, TemplateId};
use crate::core::ownership::Owned;
use crate::question::entities::Question;
use crate::question::reconcile::reconcile;
use crate::question::value_objects::{QuestionEdit, QuestionSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// A reusable review-form template (Aggregate Root)
///
/// A template exclusively owns its ordered questions: removing a question
/// from the list deletes it, and deleting the template deletes them all.
/// The creating member is fixed at construction and never changes.
/// `usage_count` tracks how many review forms were created from this
/// template and drives the trending ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    id: Option<TemplateId>,
    owner: MemberId,
    title: String,
    description: String,
    usage_count: u64,
    questions: Vec<Question>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Template {
    /// Create a template with its initial questions.
    ///
    /// Questions are positioned `0..N-1` in spec order. Fails with
    /// [`DomainError::Validation`] when the title is blank or longer than
    /// [`MAX_TITLE_LEN`] characters, or when a question text is blank.
    pub fn new(
        owner: MemberId,
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
            title,
            description: description.into(),
            usage_count: 0,
            questions,
            created_at: now,
            updated_at: now,
        })
    }

    /// Update title, description and the owned question list.
    ///
    /// Question changes go through [`reconcile`]; the returned ids are the
    /// previously persisted questions the edit list dropped, which the
    /// persistence collaborator must delete.
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

    pub fn id(&self) -> Option<TemplateId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Called by the persistence collaborator when the row is committed.
    pub fn assign_id(&mut self, id: TemplateId) {
        self.id = Some(id);
    }

    /// Mutable access for the persistence collaborator to assign question
    /// ids at commit time.
    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    /// Record that a review form was created from this template.
    pub fn record_usage(&mut self) {
        self.usage_count += 1;
    }
}

impl Owned for Template {
    fn owner_id(&self) -> MemberId {
        self.owner
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("template title must not be blank"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::validation(format!(
            "template title must not exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

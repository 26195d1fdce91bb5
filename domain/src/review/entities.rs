//! Review entities.
//!
//! - [`Review`] — a member's submitted answers against a review form
//! - [`QuestionAnswer`] — one answer paired with the question it addresses
//! - [`Answer`] — the answer text itself

use crate::core::error::DomainError;
use crate::core::id::{MemberId, QuestionId, ReviewFormId, ReviewId};
use crate::core::ownership::Owned;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::review::form::MAX_TITLE_LEN;

/// Answer text for a single question. May be empty — leaving a question
/// unanswered is a valid submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer(String);

impl Answer {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Pairs a form question with the submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    question_id: QuestionId,
    answer: Answer,
}

impl QuestionAnswer {
    pub fn new(question_id: QuestionId, answer: Answer) -> Self {
        Self {
            question_id,
            answer,
        }
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }
}

/// A retrospective submitted against a review form (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    id: Option<ReviewId>,
    owner: MemberId,
    form_id: ReviewFormId,
    title: String,
    answers: Vec<QuestionAnswer>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        owner: MemberId,
        form_id: ReviewFormId,
        title: impl Into<String>,
        answers: Vec<QuestionAnswer>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        validate_title(&title)?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            owner,
            form_id,
            title,
            answers,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace title and answers with a fresh submission.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        answers: Vec<QuestionAnswer>,
    ) -> Result<(), DomainError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        self.answers = answers;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn id(&self) -> Option<ReviewId> {
        self.id
    }

    pub fn form_id(&self) -> ReviewFormId {
        self.form_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn answers(&self) -> &[QuestionAnswer] {
        &self.answers
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Called by the persistence collaborator when the row is committed.
    pub fn assign_id(&mut self, id: ReviewId) {
        self.id = Some(id);
    }
}

impl Owned for Review {
    fn owner_id(&self) -> MemberId {
        self.owner
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("review title must not be blank"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::validation(format!(
            "review title must not exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

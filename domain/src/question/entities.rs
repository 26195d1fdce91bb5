//! Question entity owned by a template or review form.

use crate::core::error::DomainError;
use crate::core::id::QuestionId;
use serde::{Deserialize, Serialize};

/// An ordered question belonging to exactly one parent aggregate (Entity)
///
/// The id stays absent until the persistence collaborator commits the row;
/// a question created during an update therefore carries `None` until the
/// surrounding aggregate is saved. `position` is the 0-based display index
/// within the parent, reassigned as a contiguous range on every
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: Option<QuestionId>,
    value: String,
    description: String,
    position: usize,
}

impl Question {
    /// Create a not-yet-persisted question.
    ///
    /// Fails with [`DomainError::Validation`] when the question text is
    /// blank. The position is provisional until the parent assigns it.
    pub fn new(
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let value = value.into();
        validate_value(&value)?;
        Ok(Self {
            id: None,
            value,
            description: description.into(),
            position: 0,
        })
    }

    /// Rebuild a persisted question from stored fields.
    pub fn restore(
        id: QuestionId,
        value: impl Into<String>,
        description: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            id: Some(id),
            value: value.into(),
            description: description.into(),
            position,
        }
    }

    pub fn id(&self) -> Option<QuestionId> {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Overwrite text and description in place, keeping id and identity.
    pub(crate) fn apply_edit(
        &mut self,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), DomainError> {
        let value = value.into();
        validate_value(&value)?;
        self.value = value;
        self.description = description.into();
        Ok(())
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Called by the persistence collaborator when the row is committed.
    pub fn assign_id(&mut self, id: QuestionId) {
        self.id = Some(id);
    }
}

fn validate_value(value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation("question text must not be blank"));
    }
    Ok(())
}

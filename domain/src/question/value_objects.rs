//! Inputs describing requested question states (Value Objects)
//!
//! - [`QuestionSpec`] — a question to create with a new aggregate; carries
//!   no id because nothing is persisted yet.
//! - [`QuestionEdit`] — one slot of an aggregate update. An edit either
//!   references an existing question by id (update in place) or carries no
//!   id (create). The order of edits defines the final display order.

use crate::core::id::QuestionId;
use serde::{Deserialize, Serialize};

/// Specification of a question for aggregate creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    value: String,
    description: String,
}

impl QuestionSpec {
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One requested question state within an aggregate update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEdit {
    id: Option<QuestionId>,
    value: String,
    description: String,
}

impl QuestionEdit {
    /// Keep an existing question, replacing its text and description.
    pub fn keep(
        id: QuestionId,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            value: value.into(),
            description: description.into(),
        }
    }

    /// Add a new question at this slot.
    pub fn add(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
            description: description.into(),
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
}

//! Reconciliation of an owned question list against a requested edit list.
//!
//! This is the merge performed whenever a template or review form is
//! updated: a single request may update existing questions, add new ones,
//! drop others and reorder everything at once. The edit list is
//! authoritative — its order becomes the display order, and any existing
//! question it does not reference is removed from the parent.

use crate::core::error::DomainError;
use crate::core::id::QuestionId;
use crate::question::entities::Question;
use crate::question::value_objects::QuestionEdit;
use std::collections::{HashMap, HashSet};

/// Outcome of a reconciliation.
///
/// `questions` is the parent's new owned list with contiguous positions.
/// `removed` holds ids of previously persisted questions that the edit
/// list dropped; the caller's persistence collaborator must delete those
/// rows explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub questions: Vec<Question>,
    pub removed: Vec<QuestionId>,
}

/// Merge `current` with `edits`, producing the new question list.
///
/// For each edit in order: an edit with an id mutates that question in
/// place (identity and id survive), an edit without an id creates a fresh
/// question with no id yet. Positions are reassigned `0..len(edits)` in
/// edit order afterwards.
///
/// Fails with [`DomainError::Validation`] when two edits reference the same
/// question id, and with [`DomainError::NotFound`] when an edit references
/// an id that does not belong to this parent. Both checks run before any
/// question is mutated. An empty edit list is legal and empties the parent.
pub fn reconcile(
    current: Vec<Question>,
    edits: &[QuestionEdit],
) -> Result<Reconciled, DomainError> {
    let mut referenced = HashSet::new();
    for edit in edits {
        if let Some(id) = edit.id() {
            if !referenced.insert(id) {
                return Err(DomainError::validation(format!(
                    "duplicate question reference: {id}"
                )));
            }
        }
    }

    let mut existing: HashMap<QuestionId, Question> = current
        .into_iter()
        .filter_map(|question| question.id().map(|id| (id, question)))
        .collect();

    let mut questions = Vec::with_capacity(edits.len());
    for edit in edits {
        match edit.id() {
            Some(id) => {
                let mut question = existing.remove(&id).ok_or_else(|| {
                    DomainError::not_found(format!("question {id} does not belong to this form"))
                })?;
                question.apply_edit(edit.value(), edit.description())?;
                questions.push(question);
            }
            None => questions.push(Question::new(edit.value(), edit.description())?),
        }
    }

    for (index, question) in questions.iter_mut().enumerate() {
        question.set_position(index);
    }

    let mut removed: Vec<QuestionId> = existing.into_keys().collect();
    removed.sort();

    Ok(Reconciled { questions, removed })
}

//! Typed identifiers for domain entities.
//!
//! Identifiers are assigned by the persistence collaborator when an entity
//! is first committed; until then entities carry no id. Wrapping the raw
//! integer in per-entity newtypes keeps a `ReviewId` from ever being passed
//! where a `MemberId` is expected.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a registered member.
    MemberId
);
entity_id!(
    /// Identifier of a review-form template.
    TemplateId
);
entity_id!(
    /// Internal identifier of a review form (distinct from its public code).
    ReviewFormId
);
entity_id!(
    /// Identifier of a submitted review.
    ReviewId
);
entity_id!(
    /// Identifier of a question owned by a template or review form.
    QuestionId
);

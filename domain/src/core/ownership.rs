//! Ownership guard for mutating operations.
//!
//! Templates, review forms and reviews may only be modified or deleted by
//! the member who created them. Ownership is compared through immutable
//! [`MemberId`]s rather than entity references, so the check stays valid
//! across process and serialization boundaries.

use crate::core::error::DomainError;
use crate::core::id::MemberId;

/// A resource created by, and belonging to, a single member.
pub trait Owned {
    /// The id of the creating member.
    fn owner_id(&self) -> MemberId;

    /// Whether the given member is the creator.
    fn is_owned_by(&self, member: MemberId) -> bool {
        self.owner_id() == member
    }
}

/// Fail with [`DomainError::Authorization`] unless `acting` owns `resource`.
///
/// Called before every mutating operation on an owned aggregate.
pub fn assert_owner<T: Owned>(
    resource: &T,
    acting: MemberId,
    message: impl Into<String>,
) -> Result<(), DomainError> {
    if resource.is_owned_by(acting) {
        Ok(())
    } else {
        Err(DomainError::Authorization(message.into()))
    }
}

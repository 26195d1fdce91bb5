//! Member entity.

use crate::core::error::DomainError;
use crate::core::id::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered member (Entity)
///
/// `social_id` is the external identity key supplied by the identity
/// provider and never changes. Deleting a member through the admin surface
/// erases the profile fields but keeps the row, so submitted reviews stay
/// attributable to a (blanked) author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    id: Option<MemberId>,
    social_id: String,
    nickname: String,
    profile_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Member {
    pub fn new(
        social_id: impl Into<String>,
        nickname: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let social_id = social_id.into();
        if social_id.trim().is_empty() {
            return Err(DomainError::validation("social id must not be blank"));
        }
        let nickname = nickname.into();
        validate_nickname(&nickname)?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            social_id,
            nickname,
            profile_url: profile_url.into(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Option<MemberId> {
        self.id
    }

    pub fn social_id(&self) -> &str {
        &self.social_id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_nickname(&mut self, nickname: impl Into<String>) -> Result<(), DomainError> {
        let nickname = nickname.into();
        validate_nickname(&nickname)?;
        self.nickname = nickname;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Blank all profile information while keeping the row.
    pub fn erase_profile(&mut self) {
        self.nickname.clear();
        self.profile_url.clear();
        self.updated_at = Utc::now();
    }

    /// Called by the persistence collaborator when the row is committed.
    pub fn assign_id(&mut self, id: MemberId) {
        self.id = Some(id);
    }
}

fn validate_nickname(nickname: &str) -> Result<(), DomainError> {
    if nickname.trim().is_empty() {
        return Err(DomainError::validation("nickname must not be blank"));
    }
    Ok(())
}

//! User record.

use crate::domain::value_objects::{Email, UserRole};
use crate::validation::rules::not_blank;
use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user known to the application, keyed by their identity-provider id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub clerk_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Materializes a freshly synced user. New users always start as candidates.
    #[must_use]
    pub fn create(new: NewUser) -> Self {
        Self {
            id: UserId::new(),
            name: new.name,
            email: new.email,
            clerk_id: new.clerk_id,
            image: new.image,
            role: UserRole::Candidate,
            created_at: Utc::now(),
        }
    }

    /// Checks if the user conducts interviews.
    #[must_use]
    pub const fn is_interviewer(&self) -> bool {
        matches!(self.role, UserRole::Interviewer)
    }
}

/// Sync payload pushed by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(max = 120))]
    pub name: String,
    pub email: Email,
    #[validate(custom(function = "not_blank"))]
    pub clerk_id: String,
    #[serde(default)]
    #[validate(url)]
    pub image: Option<String>,
}

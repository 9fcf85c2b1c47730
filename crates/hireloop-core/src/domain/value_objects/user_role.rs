//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user in the interview flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Default role given to newly synced users.
    #[default]
    Candidate,
    /// Conducts interviews and leaves comments.
    Interviewer,
}

impl UserRole {
    /// Returns the wire form of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Interviewer => "interviewer",
        }
    }

    /// Parses a role from its stored form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "candidate" => Some(Self::Candidate),
            "interviewer" => Some(Self::Interviewer),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_candidate() {
        assert_eq!(UserRole::default(), UserRole::Candidate);
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [UserRole::Candidate, UserRole::Interviewer] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("admin"), None);
    }
}

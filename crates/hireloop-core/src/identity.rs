//! Caller identity as yielded by the identity provider.

use crate::{HireloopError, HireloopResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque subject identifier of an authenticated caller.
///
/// This is the external auth id ("clerk id"); interviews reference candidates
/// and interviewers by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    /// Wraps a raw subject id.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    /// Returns the subject as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Caller {
    /// No identity was presented, or the presented token was rejected.
    #[default]
    Anonymous,
    /// A caller the identity provider vouched for.
    Authenticated(Subject),
}

impl Caller {
    /// Creates an authenticated caller.
    #[must_use]
    pub fn authenticated(subject: impl Into<Subject>) -> Self {
        Self::Authenticated(subject.into())
    }

    /// Returns the subject, if any.
    #[must_use]
    pub const fn subject(&self) -> Option<&Subject> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(subject) => Some(subject),
        }
    }

    /// Returns the subject or fails with `Unauthorized`.
    pub fn require(&self) -> HireloopResult<&Subject> {
        self.subject()
            .ok_or_else(|| HireloopError::unauthorized("Unauthorized"))
    }

    /// Returns true if the caller is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_require_fails() {
        let err = Caller::Anonymous.require().unwrap_err();
        assert!(matches!(err, HireloopError::Unauthorized(_)));
        assert!(!Caller::default().is_authenticated());
    }

    #[test]
    fn test_authenticated_require_yields_subject() {
        let caller = Caller::authenticated("user_2abc");
        assert_eq!(caller.require().unwrap().as_str(), "user_2abc");
        assert_eq!(caller.subject().map(ToString::to_string), Some("user_2abc".to_string()));
    }
}

//! Cache key derivation.
//!
//! Keys are unprefixed so entries written by earlier deployments stay
//! addressable.

use hireloop_core::{InterviewId, Subject};

/// Comments of one interview.
#[must_use]
pub fn comments_by_interview(interview_id: InterviewId) -> String {
    format!("comments:interviewId:{}", interview_id)
}

/// Interviews listed for a caller ("my interviews", and "all interviews" in legacy mode).
#[must_use]
pub fn interviews_by_user(subject: &Subject) -> String {
    format!("interviews:user:{}", subject)
}

/// Every interview, independent of the caller.
#[must_use]
pub fn interviews_all() -> String {
    "interviews:all".to_string()
}

/// A single interview by id.
#[must_use]
pub fn interview_by_id(interview_id: InterviewId) -> String {
    format!("interview:{}", interview_id)
}

/// The interview bound to a video call.
#[must_use]
pub fn interview_by_stream_call_id(stream_call_id: &str) -> String {
    format!("interview:streamCallId:{}", stream_call_id)
}

/// User list as cached per caller in legacy mode.
#[must_use]
pub fn users_by_caller(subject: &Subject) -> String {
    format!("users:{}", subject)
}

/// Every user, independent of the caller.
#[must_use]
pub fn users_all() -> String {
    "users:all".to_string()
}

/// A user by external auth id.
#[must_use]
pub fn user_by_clerk_id(clerk_id: &str) -> String {
    format!("users:clerkId:{}", clerk_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_keys() {
        let id = InterviewId::parse("0190a3c2-7f5e-7cc1-8a0b-5d6e7f8a9b0c").unwrap();
        assert_eq!(
            comments_by_interview(id),
            "comments:interviewId:0190a3c2-7f5e-7cc1-8a0b-5d6e7f8a9b0c"
        );
        assert_eq!(interview_by_id(id), "interview:0190a3c2-7f5e-7cc1-8a0b-5d6e7f8a9b0c");
        assert_eq!(interview_by_stream_call_id("call-9"), "interview:streamCallId:call-9");
    }

    #[test]
    fn test_user_keys() {
        let subject = Subject::new("user_2abc");
        assert_eq!(interviews_by_user(&subject), "interviews:user:user_2abc");
        assert_eq!(users_by_caller(&subject), "users:user_2abc");
        assert_eq!(user_by_clerk_id("user_2abc"), "users:clerkId:user_2abc");
    }

    #[test]
    fn test_caller_independent_keys_cannot_collide_with_subjects() {
        assert_ne!(interviews_all(), interviews_by_user(&Subject::new("all")));
        assert_ne!(users_all(), user_by_clerk_id("all"));
    }
}

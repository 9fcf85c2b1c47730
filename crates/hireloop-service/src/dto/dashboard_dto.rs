//! Dashboard DTOs.

use hireloop_core::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role-specific landing summary for the signed-in caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub role: UserRole,
    pub greeting: String,
    pub total_interviews: usize,
    pub upcoming_interviews: usize,
    pub completed_interviews: usize,
}

/// Time-of-day greeting: before noon, before 17:00, otherwise evening.
#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(16), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn test_summary_wire_format() {
        let summary = DashboardSummary {
            role: UserRole::Interviewer,
            greeting: "Good evening".to_string(),
            total_interviews: 3,
            upcoming_interviews: 1,
            completed_interviews: 2,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["role"], "interviewer");
        assert_eq!(json["upcomingInterviews"], 1);
    }
}

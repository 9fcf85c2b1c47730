//! Interview record.

use crate::domain::value_objects::InterviewStatus;
use crate::validation::rules::{no_blank_entries, not_blank};
use crate::InterviewId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A scheduled interview between a candidate and one or more interviewers.
///
/// Candidate and interviewer ids are identity-provider subjects, not user
/// record ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: InterviewId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub status: InterviewStatus,
    pub stream_call_id: String,
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    /// Materializes a new interview from its creation payload.
    #[must_use]
    pub fn create(new: NewInterview) -> Self {
        Self {
            id: InterviewId::new(),
            title: new.title,
            description: new.description,
            start_time: new.start_time,
            end_time: None,
            status: new.status,
            stream_call_id: new.stream_call_id,
            candidate_id: new.candidate_id,
            interviewer_ids: new.interviewer_ids,
            created_at: Utc::now(),
        }
    }

    /// Applies a status change, stamping the end time on completion.
    pub fn apply_status(&mut self, status: InterviewStatus, now: DateTime<Utc>) {
        self.status = status;
        if status.sets_end_time() {
            self.end_time = Some(now);
        }
    }

    /// Whether the interview starts after `now`.
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }
}

/// Creation payload for an interview.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewInterview {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub status: InterviewStatus,
    #[validate(custom(function = "not_blank"))]
    pub stream_call_id: String,
    #[validate(custom(function = "not_blank"))]
    pub candidate_id: String,
    #[serde(default)]
    #[validate(custom(function = "no_blank_entries"))]
    pub interviewer_ids: Vec<String>,
}

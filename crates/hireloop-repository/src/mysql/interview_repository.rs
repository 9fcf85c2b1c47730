//! MySQL interview repository.

use super::parse_uuid;
use crate::{traits::InterviewRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireloop_core::{HireloopError, HireloopResult, Interview, InterviewId, InterviewStatus};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, description, start_time, end_time, status,
           stream_call_id, candidate_id, interviewer_ids, created_at
    FROM interviews
"#;

/// MySQL-backed `interviews` collection.
#[derive(Component, Clone)]
#[shaku(interface = InterviewRepository)]
pub struct MySqlInterviewRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlInterviewRepository {
    /// Creates a new MySQL interview repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InterviewRow {
    id: String,
    title: String,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    status: String,
    stream_call_id: String,
    candidate_id: String,
    /// JSON array of subjects.
    interviewer_ids: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<InterviewRow> for Interview {
    type Error = HireloopError;

    fn try_from(row: InterviewRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<InterviewStatus>()
            .map_err(|e| HireloopError::Internal(e.to_string()))?;
        let interviewer_ids: Vec<String> = serde_json::from_str(&row.interviewer_ids)?;

        Ok(Interview {
            id: InterviewId::from(parse_uuid(&row.id)?),
            title: row.title,
            description: row.description,
            start_time: row.start_time,
            end_time: row.end_time,
            status,
            stream_call_id: row.stream_call_id,
            candidate_id: row.candidate_id,
            interviewer_ids,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl InterviewRepository for MySqlInterviewRepository {
    async fn insert(&self, interview: &Interview) -> HireloopResult<Interview> {
        debug!("Inserting interview {}", interview.id);
        let interviewer_ids = serde_json::to_string(&interview.interviewer_ids)?;

        sqlx::query(
            r#"
            INSERT INTO interviews (id, title, description, start_time, end_time, status,
                                    stream_call_id, candidate_id, interviewer_ids, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(interview.id.to_string())
        .bind(&interview.title)
        .bind(&interview.description)
        .bind(interview.start_time)
        .bind(interview.end_time)
        .bind(interview.status.as_str())
        .bind(&interview.stream_call_id)
        .bind(&interview.candidate_id)
        .bind(interviewer_ids)
        .bind(interview.created_at)
        .execute(self.pool.inner())
        .await?;

        Ok(interview.clone())
    }

    async fn find_all(&self) -> HireloopResult<Vec<Interview>> {
        let rows = sqlx::query_as::<_, InterviewRow>(&format!("{SELECT_COLUMNS} ORDER BY seq"))
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Interview::try_from).collect()
    }

    async fn find_by_candidate(&self, candidate_id: &str) -> HireloopResult<Vec<Interview>> {
        debug!("Finding interviews for candidate {}", candidate_id);
        let rows = sqlx::query_as::<_, InterviewRow>(&format!(
            "{SELECT_COLUMNS} WHERE candidate_id = ? ORDER BY seq"
        ))
        .bind(candidate_id)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Interview::try_from).collect()
    }

    async fn find_by_stream_call_id(&self, stream_call_id: &str) -> HireloopResult<Option<Interview>> {
        let row = sqlx::query_as::<_, InterviewRow>(&format!(
            "{SELECT_COLUMNS} WHERE stream_call_id = ? ORDER BY seq LIMIT 1"
        ))
        .bind(stream_call_id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Interview::try_from).transpose()
    }

    async fn find_by_id(&self, id: InterviewId) -> HireloopResult<Option<Interview>> {
        let row = sqlx::query_as::<_, InterviewRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Interview::try_from).transpose()
    }

    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
        now: DateTime<Utc>,
    ) -> HireloopResult<Interview> {
        debug!("Patching interview {} to status {}", id, status);
        let end_time = status.sets_end_time().then_some(now);

        sqlx::query(
            r#"
            UPDATE interviews
            SET status = ?, end_time = COALESCE(?, end_time)
            WHERE id = ?
            "#,
        )
        .bind(status.as_str())
        .bind(end_time)
        .bind(id.to_string())
        .execute(self.pool.inner())
        .await?;

        // rows_affected is 0 for a no-op patch too, so re-read to detect a missing id
        self.find_by_id(id)
            .await?
            .ok_or_else(|| HireloopError::not_found("Interview", id))
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entities::{RunLog, RunStatus},
    refresh::{RefreshOutcome, SkipReason},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Body of the refresh endpoint. Absent counters are omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_fetched: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_fetched: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_delete: Option<bool>,
}

impl From<&RefreshOutcome> for UpdateNewsResponse {
    fn from(outcome: &RefreshOutcome) -> Self {
        let empty = Self {
            success: false,
            inserted: None,
            world_fetched: None,
            sport_fetched: None,
            skipped_delete: None,
        };

        match *outcome {
            RefreshOutcome::Completed {
                inserted,
                world_fetched,
                sport_fetched,
            } => Self {
                success: true,
                inserted: Some(inserted),
                world_fetched: Some(world_fetched),
                sport_fetched: Some(sport_fetched),
                ..empty
            },
            RefreshOutcome::Skipped {
                reason: SkipReason::NothingFetched,
                ..
            } => Self {
                success: true,
                inserted: Some(0),
                skipped_delete: Some(true),
                ..empty
            },
            // the lease holder is doing the work; counters describe our own fetch
            RefreshOutcome::Skipped {
                reason: SkipReason::RefreshInProgress,
                world_fetched,
                sport_fetched,
            } => Self {
                success: true,
                inserted: Some(0),
                world_fetched: Some(world_fetched),
                sport_fetched: Some(sport_fetched),
                skipped_delete: Some(true),
            },
            RefreshOutcome::Failed { .. } => empty,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ManualUpdateResponse {
    pub success: bool,
    pub message: String,
    /// Body returned by the refresh endpoint.
    #[schema(value_type = Object)]
    pub result: serde_json::Value,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunLogResponse {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub status: RunStatus,
    pub inserted_count: i32,
    pub world_fetched: i32,
    pub sport_fetched: i32,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RunLog> for RunLogResponse {
    fn from(log: RunLog) -> Self {
        Self {
            id: log.id,
            status: log.status,
            inserted_count: log.inserted_count,
            world_fetched: log.world_fetched,
            sport_fetched: log.sport_fetched,
            error_message: log.error_message,
            created_at: log.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RunLogListResponse {
    pub logs: Vec<RunLogResponse>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// --- PostgreSQL Enums ---
#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[sqlx(type_name = "article_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    /// Written by editors; never touched by the refresh run.
    Local,
    World,
    Sport,
}

impl ArticleCategory {
    /// Categories whose rows are owned by the refresh run.
    pub const REFRESHED: [ArticleCategory; 2] = [ArticleCategory::World, ArticleCategory::Sport];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::World => "world",
            Self::Sport => "sport",
        }
    }
}

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "run_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Skipped,
    Error,
}

/// --- Tables ---

#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub title_so: Option<String>,
    pub content_so: Option<String>,
    pub category: ArticleCategory,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub run_id: Option<Uuid>, // refresh run that wrote the row
}

/// Row produced by a refresh run, before the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub title_so: String,
    pub content_so: String,
    pub category: ArticleCategory,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RunLog {
    pub id: Uuid,
    pub status: RunStatus,
    pub inserted_count: i32,
    pub world_fetched: i32,
    pub sport_fetched: i32,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRunLog {
    pub status: RunStatus,
    pub inserted_count: i32,
    pub world_fetched: i32,
    pub sport_fetched: i32,
    pub error_message: Option<String>,
}

impl NewRunLog {
    pub fn success(inserted: usize, world: usize, sport: usize) -> Self {
        Self {
            status: RunStatus::Success,
            inserted_count: inserted as i32,
            world_fetched: world as i32,
            sport_fetched: sport as i32,
            error_message: None,
        }
    }

    pub fn skipped(world: usize, sport: usize, reason: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Skipped,
            inserted_count: 0,
            world_fetched: world as i32,
            sport_fetched: sport as i32,
            error_message: Some(reason.into()),
        }
    }

    pub fn error(world: usize, sport: usize, message: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Error,
            inserted_count: 0,
            world_fetched: world as i32,
            sport_fetched: sport as i32,
            error_message: Some(message.into()),
        }
    }
}

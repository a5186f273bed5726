use crate::entities::{NewRunLog, RunLog};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RunLogRepositoryTrait {
    async fn record(&self, log: NewRunLog) -> Result<()>;

    async fn recent(&self, limit: i64) -> Result<Vec<RunLog>>;
}

/// Append-only store for refresh run diagnostics.
#[derive(Clone)]
pub struct RunLogRepository {
    pool: PgPool,
}

impl RunLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunLogRepositoryTrait for RunLogRepository {
    async fn record(&self, log: NewRunLog) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO news_update_logs
                  (status, inserted_count, world_fetched, sport_fetched, error_message)
            VALUES ($1,     $2,             $3,            $4,            $5)
            "#,
        )
        .bind(log.status)
        .bind(log.inserted_count)
        .bind(log.world_fetched)
        .bind(log.sport_fetched)
        .bind(log.error_message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<RunLog>> {
        let logs = sqlx::query_as::<_, RunLog>(
            r#"
            SELECT id, status, inserted_count, world_fetched, sport_fetched,
                   error_message, created_at
            FROM news_update_logs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}

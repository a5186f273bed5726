use crate::entities::{Article, ArticleCategory, NewArticle};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Key for the transaction-scoped advisory lock held while a refresh run
/// swaps the world/sport rows.
pub const REFRESH_LOCK_KEY: i64 = 0x6e65_7773_6465_736b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced { deleted: u64, inserted: u64 },
    /// Another run holds the refresh lock; nothing was changed.
    Busy,
}

#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("failed to open refresh transaction: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("failed to take refresh lock: {0}")]
    Lock(#[source] sqlx::Error),

    #[error("failed to delete refreshed articles: {0}")]
    Delete(#[source] sqlx::Error),

    #[error("failed to insert refreshed articles: {0}")]
    Insert(#[source] sqlx::Error),

    #[error("failed to commit refresh transaction: {0}")]
    Commit(#[source] sqlx::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepositoryTrait {
    /// Newest articles of one category, `published_at` descending.
    async fn list_by_category(&self, category: ArticleCategory, limit: i64)
    -> Result<Vec<Article>>;

    /// Swap every world/sport row for `rows` in one transaction.
    async fn replace_refreshed(
        &self,
        run_id: Uuid,
        rows: Vec<NewArticle>,
    ) -> std::result::Result<ReplaceOutcome, ReplaceError>;
}

#[derive(Clone)]
pub struct ArticleRepository {
    pool: PgPool,
}

impl ArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepositoryTrait for ArticleRepository {
    async fn list_by_category(
        &self,
        category: ArticleCategory,
        limit: i64,
    ) -> Result<Vec<Article>> {
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, title_so, content_so, category,
                   image_url, published_at, created_at, run_id
            FROM articles
            WHERE category = $1
            ORDER BY published_at DESC NULLS LAST, created_at DESC
            LIMIT $2
            "#,
        )
        .bind(category)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn replace_refreshed(
        &self,
        run_id: Uuid,
        rows: Vec<NewArticle>,
    ) -> std::result::Result<ReplaceOutcome, ReplaceError> {
        let mut tx = self.pool.begin().await.map_err(ReplaceError::Begin)?;

        let acquired: bool = sqlx::query_scalar("SELECT pg_try_advisory_xact_lock($1)")
            .bind(REFRESH_LOCK_KEY)
            .fetch_one(&mut *tx)
            .await
            .map_err(ReplaceError::Lock)?;

        if !acquired {
            warn!("refresh lock held by another run");
            if let Err(e) = tx.rollback().await {
                warn!("rollback after busy lock failed: {}", e);
            }
            return Ok(ReplaceOutcome::Busy);
        }

        let [world, sport] = ArticleCategory::REFRESHED;
        let deleted = sqlx::query("DELETE FROM articles WHERE category IN ($1, $2)")
            .bind(world)
            .bind(sport)
            .execute(&mut *tx)
            .await
            .map_err(ReplaceError::Delete)?
            .rows_affected();

        let mut inserted = 0;
        if !rows.is_empty() {
            let mut builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO articles \
                 (title, content, title_so, content_so, category, image_url, published_at, run_id) ",
            );
            builder.push_values(rows, |mut b, row| {
                b.push_bind(row.title)
                    .push_bind(row.content)
                    .push_bind(row.title_so)
                    .push_bind(row.content_so)
                    .push_bind(row.category)
                    .push_bind(row.image_url)
                    .push_bind(row.published_at)
                    .push_bind(run_id);
            });

            inserted = builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(ReplaceError::Insert)?
                .rows_affected();
        }

        tx.commit().await.map_err(ReplaceError::Commit)?;

        info!(deleted, inserted, %run_id, "refreshed articles replaced");
        Ok(ReplaceOutcome::Replaced { deleted, inserted })
    }
}

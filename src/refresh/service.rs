use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, instrument, warn};
use uuid::Uuid;

use crate::{
    entities::{ArticleCategory, NewArticle, NewRunLog},
    news::{NewsSource, NormalizedArticle},
    repositories::{ArticleRepositoryTrait, ReplaceOutcome, RunLogRepositoryTrait},
    translate::Translator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Both buckets came back empty; existing rows were kept.
    NothingFetched,
    /// Another run held the refresh lock.
    RefreshInProgress,
}

impl SkipReason {
    fn as_str(&self) -> &'static str {
        match self {
            Self::NothingFetched => "no articles fetched",
            Self::RefreshInProgress => "another refresh run is in progress",
        }
    }
}

/// Result of one refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed {
        inserted: usize,
        world_fetched: usize,
        sport_fetched: usize,
    },
    Skipped {
        reason: SkipReason,
        world_fetched: usize,
        sport_fetched: usize,
    },
    Failed {
        message: String,
    },
}

/// Fetches both buckets, translates them and swaps the stored world/sport
/// rows.
pub struct RefreshService {
    news: Arc<dyn NewsSource>,
    translator: Arc<dyn Translator>,
    article_repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>,
    run_log_repo: Arc<dyn RunLogRepositoryTrait + Send + Sync>,
}

impl RefreshService {
    pub fn new(
        news: Arc<dyn NewsSource>,
        translator: Arc<dyn Translator>,
        article_repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>,
        run_log_repo: Arc<dyn RunLogRepositoryTrait + Send + Sync>,
    ) -> Self {
        Self {
            news,
            translator,
            article_repo,
            run_log_repo,
        }
    }

    /// Run on a separate task so a dropped HTTP connection cannot cancel the
    /// swap half-way, and so a panic still produces an error run log.
    pub async fn run_detached(self: &Arc<Self>) -> RefreshOutcome {
        let service = Arc::clone(self);
        let handle = tokio::spawn(
            async move { service.run_at(Utc::now()).await }
                .instrument(info_span!("refresh_run")),
        );

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("refresh run aborted: {}", e);
                error!("{}", message);
                self.record(NewRunLog::error(0, 0, message.clone())).await;
                RefreshOutcome::Failed { message }
            }
        }
    }

    /// One run. Every row written is stamped with `run_started_at`.
    #[instrument(skip(self))]
    pub async fn run_at(&self, run_started_at: DateTime<Utc>) -> RefreshOutcome {
        let (world, football) = tokio::join!(
            self.news.fetch_world_news(),
            self.news.fetch_football_news()
        );
        let (world_fetched, sport_fetched) = (world.len(), football.len());
        info!(world_fetched, sport_fetched, "news fetched");

        let (world_rows, sport_rows) = tokio::join!(
            self.translate_bucket(world, ArticleCategory::World, run_started_at),
            self.translate_bucket(football, ArticleCategory::Sport, run_started_at),
        );
        let rows: Vec<NewArticle> = world_rows.into_iter().chain(sport_rows).collect();

        if rows.is_empty() {
            return self
                .skip(SkipReason::NothingFetched, world_fetched, sport_fetched)
                .await;
        }

        let run_id = Uuid::new_v4();
        match self.article_repo.replace_refreshed(run_id, rows).await {
            Ok(ReplaceOutcome::Replaced { deleted, inserted }) => {
                info!(%run_id, deleted, inserted, "refresh run completed");
                let inserted = inserted as usize;
                self.record(NewRunLog::success(inserted, world_fetched, sport_fetched))
                    .await;
                RefreshOutcome::Completed {
                    inserted,
                    world_fetched,
                    sport_fetched,
                }
            }
            Ok(ReplaceOutcome::Busy) => {
                self.skip(SkipReason::RefreshInProgress, world_fetched, sport_fetched)
                    .await
            }
            Err(e) => {
                let message = e.to_string();
                error!(%run_id, "refresh run failed: {}", message);
                self.record(NewRunLog::error(world_fetched, sport_fetched, message.clone()))
                    .await;
                RefreshOutcome::Failed { message }
            }
        }
    }

    async fn skip(
        &self,
        reason: SkipReason,
        world_fetched: usize,
        sport_fetched: usize,
    ) -> RefreshOutcome {
        warn!("refresh skipped: {}", reason.as_str());
        self.record(NewRunLog::skipped(
            world_fetched,
            sport_fetched,
            reason.as_str(),
        ))
        .await;
        RefreshOutcome::Skipped {
            reason,
            world_fetched,
            sport_fetched,
        }
    }

    async fn translate_bucket(
        &self,
        articles: Vec<NormalizedArticle>,
        category: ArticleCategory,
        published_at: DateTime<Utc>,
    ) -> Vec<NewArticle> {
        join_all(
            articles
                .into_iter()
                .map(|article| self.translate_article(article, category, published_at)),
        )
        .await
    }

    async fn translate_article(
        &self,
        article: NormalizedArticle,
        category: ArticleCategory,
        published_at: DateTime<Utc>,
    ) -> NewArticle {
        let (title_so, content_so) = tokio::join!(
            self.translator.translate_to_somali(&article.title),
            self.translator.translate_to_somali(&article.content),
        );

        NewArticle {
            title: article.title,
            content: article.content,
            title_so,
            content_so,
            category,
            image_url: article.image_url,
            published_at,
        }
    }

    /// Best effort: a failed run-log write never changes the run's outcome.
    async fn record(&self, log: NewRunLog) {
        let status = log.status;
        if let Err(e) = self.run_log_repo.record(log).await {
            warn!(?status, "failed to record refresh run log: {}", e);
        }
    }
}

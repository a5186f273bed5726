use crate::{
    config::Config,
    news::{NewsApiClient, NewsSource},
    refresh::{RefreshService, RefreshTrigger},
    repositories::{
        ArticleRepository, ArticleRepositoryTrait, RunLogRepository, RunLogRepositoryTrait,
    },
    translate::{GoogleTranslator, Translator},
    widgets::{LiveScoresClient, WeatherClient},
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub article_repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>,
    pub run_log_repo: Arc<dyn RunLogRepositoryTrait + Send + Sync>,
    pub refresh: Arc<RefreshService>,
    pub trigger: RefreshTrigger,
    pub live_scores: LiveScoresClient,
    pub weather: WeatherClient,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, config: Config) -> Self {
        let news: Arc<dyn NewsSource> = Arc::new(NewsApiClient::from_config(&config));
        let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::from_config(&config));

        Self::from_parts(
            pool.clone(),
            config,
            Arc::new(ArticleRepository::new(pool.clone())),
            Arc::new(RunLogRepository::new(pool)),
            news,
            translator,
        )
    }

    /// Wire the state from explicit seams; `new` supplies the production ones.
    pub fn from_parts(
        pool: Pool<Postgres>,
        config: Config,
        article_repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>,
        run_log_repo: Arc<dyn RunLogRepositoryTrait + Send + Sync>,
        news: Arc<dyn NewsSource>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let refresh = Arc::new(RefreshService::new(
            news,
            translator,
            article_repo.clone(),
            run_log_repo.clone(),
        ));

        Self {
            trigger: RefreshTrigger::from_config(&config),
            live_scores: LiveScoresClient::from_config(&config),
            weather: WeatherClient::from_config(&config),
            config: Arc::new(config),
            article_repo,
            run_log_repo,
            refresh,
            db_pool: pool,
        }
    }
}

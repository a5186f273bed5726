pub mod article;
pub mod run_log;

pub use article::{
    ArticleRepository, ArticleRepositoryTrait, REFRESH_LOCK_KEY, ReplaceError, ReplaceOutcome,
};
pub use run_log::{RunLogRepository, RunLogRepositoryTrait};

//! Runs one refresh in-process and exits; for hosts driven by an external
//! cron instead of the API's own schedule.

use anyhow::{Context, Result, bail};
use newsdesk::{
    app_state::AppState, config::Config, refresh::RefreshOutcome, telemetry::init_tracing,
};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("loading configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(config.database_url())
        .await
        .context("connecting to database")?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::new(pool, config);
    match state.refresh.run_detached().await {
        RefreshOutcome::Failed { message } => bail!("refresh failed: {}", message),
        outcome => {
            info!(?outcome, "refresh finished");
            Ok(())
        }
    }
}

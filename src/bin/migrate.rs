use anyhow::{Context, Result};
use newsdesk::config::ENV_DATABASE_URL;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let db_url = std::env::var(ENV_DATABASE_URL)
        .with_context(|| format!("{} environment variable not set", ENV_DATABASE_URL))?;

    let pool: Pool<Postgres> = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db_url)
        .await?;

    // runs all pending migrations; no-op if up-to-date
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(())
}

use axum::{Json, extract::State};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    articles::{
        PAGE_LIMIT, displayable,
        dtos::{ArticleListResponse, ArticleView},
        fallback,
    },
    entities::ArticleCategory,
};

async fn list(
    state: &AppState,
    category: ArticleCategory,
    source: &str,
    fallback: fn() -> Vec<ArticleView>,
) -> ArticleListResponse {
    let articles = match state
        .article_repo
        .list_by_category(category, PAGE_LIMIT)
        .await
    {
        Ok(rows) => displayable(rows, source),
        Err(e) => {
            warn!(category = category.as_str(), "failed to read articles: {}", e);
            Vec::new()
        }
    };

    if articles.is_empty() {
        info!(category = category.as_str(), "no complete articles, serving samples");
        return ArticleListResponse {
            articles: fallback(),
        };
    }

    ArticleListResponse { articles }
}

#[utoipa::path(
    get,
    path = "/api/world-news",
    tag = "articles",
    responses(
        (status = 200, description = "Newest complete world articles, or samples", body = ArticleListResponse)
    )
)]
pub async fn world_news(State(state): State<AppState>) -> Json<ArticleListResponse> {
    Json(list(&state, ArticleCategory::World, "World News", fallback::world_articles).await)
}

#[utoipa::path(
    get,
    path = "/api/football-news",
    tag = "articles",
    responses(
        (status = 200, description = "Newest complete football articles, or samples", body = ArticleListResponse)
    )
)]
pub async fn football_news(State(state): State<AppState>) -> Json<ArticleListResponse> {
    Json(
        list(
            &state,
            ArticleCategory::Sport,
            "Football News",
            fallback::football_articles,
        )
        .await,
    )
}

use axum::{Router, http::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    articles::{self, dtos::ArticleListResponse, dtos::ArticleView},
    health::{self, HealthResponse},
    refresh::{
        self,
        dtos::{
            ErrorResponse, ManualUpdateResponse, RunLogListResponse, RunLogResponse,
            UpdateNewsResponse,
        },
    },
    widgets::{self, MatchSummary, WeatherReport, handlers::LiveScoresResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        refresh::handlers::update_news,
        refresh::handlers::manual_update_news,
        refresh::handlers::list_run_logs,
        articles::handlers::world_news,
        articles::handlers::football_news,
        widgets::handlers::live_scores,
        widgets::handlers::weather,
    ),
    components(schemas(
        HealthResponse,
        ErrorResponse,
        UpdateNewsResponse,
        ManualUpdateResponse,
        RunLogResponse,
        RunLogListResponse,
        ArticleView,
        ArticleListResponse,
        MatchSummary,
        LiveScoresResponse,
        WeatherReport,
    )),
    tags(
        (name = "refresh", description = "Content refresh trigger and run history"),
        (name = "articles", description = "Published world and football articles"),
        (name = "widgets", description = "Live scores and weather"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let http_layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/api/cron/update-news", get(refresh::handlers::update_news))
        .route("/api/cron/logs", get(refresh::handlers::list_run_logs))
        .route(
            "/api/manual-update-news",
            get(refresh::handlers::manual_update_news),
        )
        .route("/api/world-news", get(articles::handlers::world_news))
        .route("/api/football-news", get(articles::handlers::football_news))
        .route("/api/live-scores", get(widgets::handlers::live_scores))
        .route("/api/weather", get(widgets::handlers::weather))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(http_layers)
        .with_state(state)
}

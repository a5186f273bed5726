use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    app_state::AppState,
    refresh::{
        CronAuthorization, RefreshOutcome,
        dtos::{ErrorResponse, ManualUpdateResponse, RunLogListResponse, UpdateNewsResponse},
    },
};

const RECENT_LOGS_LIMIT: i64 = 20;

#[utoipa::path(
    get,
    path = "/api/cron/update-news",
    tag = "refresh",
    responses(
        (status = 200, description = "Run completed or skipped", body = UpdateNewsResponse),
        (status = 401, description = "Missing or wrong cron secret", body = ErrorResponse),
        (status = 500, description = "Run failed", body = UpdateNewsResponse)
    )
)]
pub async fn update_news(_auth: CronAuthorization, State(state): State<AppState>) -> Response {
    let outcome = state.refresh.run_detached().await;

    let status = match outcome {
        RefreshOutcome::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };

    (status, Json(UpdateNewsResponse::from(&outcome))).into_response()
}

#[utoipa::path(
    get,
    path = "/api/manual-update-news",
    tag = "refresh",
    responses(
        (status = 200, description = "Refresh endpoint called", body = ManualUpdateResponse),
        (status = 401, description = "Missing or wrong cron secret", body = ErrorResponse),
        (status = 500, description = "Refresh endpoint unreachable", body = ErrorResponse)
    )
)]
pub async fn manual_update_news(
    _auth: CronAuthorization,
    State(state): State<AppState>,
) -> Response {
    match state.trigger.trigger().await {
        Ok((_, result)) => Json(ManualUpdateResponse {
            success: true,
            message: "Manual news update triggered".to_string(),
            result,
        })
        .into_response(),
        Err(e) => {
            error!("manual refresh failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("{:#}", e))),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/cron/logs",
    tag = "refresh",
    responses(
        (status = 200, description = "Most recent refresh runs", body = RunLogListResponse),
        (status = 401, description = "Missing or wrong cron secret", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_run_logs(_auth: CronAuthorization, State(state): State<AppState>) -> Response {
    match state.run_log_repo.recent(RECENT_LOGS_LIMIT).await {
        Ok(logs) => Json(RunLogListResponse {
            logs: logs.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        Err(e) => {
            error!("failed to list refresh run logs: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Database error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        entities::{RunLog, RunStatus},
        news::{MockNewsSource, NormalizedArticle},
        repositories::{
            ReplaceError, ReplaceOutcome, article::MockArticleRepositoryTrait,
            run_log::MockRunLogRepositoryTrait,
        },
        translate::MockTranslator,
    };
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, header::AUTHORIZATION},
        routing::get,
    };
    use chrono::Utc;
    use serde_json::{Value, json};
    use sqlx::{Pool, Postgres};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    const SECRET: &str = "s3cret";

    fn create_test_pool() -> Pool<Postgres> {
        // Dummy pool; never connected by these tests
        Pool::<Postgres>::connect_lazy("postgresql://dummy").expect("Failed to create test pool")
    }

    fn article(title: &str) -> NormalizedArticle {
        NormalizedArticle {
            title: title.to_string(),
            content: format!("{title} body"),
            image_url: None,
            published_at: None,
            source: Some("Wire".to_string()),
        }
    }

    fn echo_translator() -> MockTranslator {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate_to_somali()
            .returning(|text| format!("so: {text}"));
        translator
    }

    fn idle_news() -> MockNewsSource {
        let mut news = MockNewsSource::new();
        news.expect_fetch_world_news().times(0);
        news.expect_fetch_football_news().times(0);
        news
    }

    fn create_test_app(
        config: Config,
        news: MockNewsSource,
        translator: MockTranslator,
        article_repo: MockArticleRepositoryTrait,
        run_log_repo: MockRunLogRepositoryTrait,
    ) -> Router {
        let state = AppState::from_parts(
            create_test_pool(),
            config,
            Arc::new(article_repo),
            Arc::new(run_log_repo),
            Arc::new(news),
            Arc::new(translator),
        );

        Router::new()
            .route("/api/cron/update-news", get(update_news))
            .route("/api/manual-update-news", get(manual_update_news))
            .route("/api/cron/logs", get(list_run_logs))
            .with_state(state)
    }

    async fn call(app: Router, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_wrong_secret_is_rejected_without_side_effects() {
        let mut article_repo = MockArticleRepositoryTrait::new();
        article_repo.expect_replace_refreshed().times(0);
        let mut run_log_repo = MockRunLogRepositoryTrait::new();
        run_log_repo.expect_record().times(0);

        let app = create_test_app(
            Config::default().with_cron_secret(SECRET),
            idle_news(),
            MockTranslator::new(),
            article_repo,
            run_log_repo,
        );

        let (status, body) = call(app, "/api/cron/update-news", Some("wrong")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"success": false, "error": "Unauthorized"}));
    }

    #[tokio::test]
    async fn test_missing_bearer_is_rejected() {
        let app = create_test_app(
            Config::default().with_cron_secret(SECRET),
            idle_news(),
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            MockRunLogRepositoryTrait::new(),
        );

        let (status, body) = call(app, "/api/cron/update-news", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_successful_run_reports_counts() {
        let mut news = MockNewsSource::new();
        news.expect_fetch_world_news()
            .times(1)
            .returning(|| vec![article("W1"), article("W2")]);
        news.expect_fetch_football_news()
            .times(1)
            .returning(|| vec![article("F1")]);

        let mut article_repo = MockArticleRepositoryTrait::new();
        article_repo
            .expect_replace_refreshed()
            .times(1)
            .returning(|_, rows| {
                Ok(ReplaceOutcome::Replaced {
                    deleted: 7,
                    inserted: rows.len() as u64,
                })
            });

        let mut run_log_repo = MockRunLogRepositoryTrait::new();
        run_log_repo
            .expect_record()
            .withf(|log| log.status == RunStatus::Success && log.inserted_count == 3)
            .times(1)
            .returning(|_| Ok(()));

        let app = create_test_app(
            Config::default().with_cron_secret(SECRET),
            news,
            echo_translator(),
            article_repo,
            run_log_repo,
        );

        let (status, body) = call(app, "/api/cron/update-news", Some(SECRET)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "inserted": 3, "worldFetched": 2, "sportFetched": 1})
        );
    }

    #[tokio::test]
    async fn test_no_secret_configured_lets_callers_through() {
        let mut news = MockNewsSource::new();
        news.expect_fetch_world_news().returning(Vec::new);
        news.expect_fetch_football_news().returning(Vec::new);

        let mut article_repo = MockArticleRepositoryTrait::new();
        article_repo.expect_replace_refreshed().times(0);

        let mut run_log_repo = MockRunLogRepositoryTrait::new();
        run_log_repo
            .expect_record()
            .withf(|log| log.status == RunStatus::Skipped)
            .times(1)
            .returning(|_| Ok(()));

        let app = create_test_app(
            Config::default(),
            news,
            MockTranslator::new(),
            article_repo,
            run_log_repo,
        );

        let (status, body) = call(app, "/api/cron/update-news", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "inserted": 0, "skippedDelete": true})
        );
    }

    #[tokio::test]
    async fn test_delete_failure_answers_500() {
        let mut news = MockNewsSource::new();
        news.expect_fetch_world_news()
            .returning(|| vec![article("W1")]);
        news.expect_fetch_football_news().returning(Vec::new);

        let mut article_repo = MockArticleRepositoryTrait::new();
        article_repo
            .expect_replace_refreshed()
            .times(1)
            .returning(|_, _| Err(ReplaceError::Delete(sqlx::Error::PoolTimedOut)));

        let mut run_log_repo = MockRunLogRepositoryTrait::new();
        run_log_repo
            .expect_record()
            .withf(|log| log.status == RunStatus::Error && log.error_message.is_some())
            .times(1)
            .returning(|_| Ok(()));

        let app = create_test_app(
            Config::default(),
            news,
            echo_translator(),
            article_repo,
            run_log_repo,
        );

        let (status, body) = call(app, "/api/cron/update-news", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false}));
    }

    #[tokio::test]
    async fn test_panicking_run_is_answered_and_logged() {
        let mut news = MockNewsSource::new();
        news.expect_fetch_world_news()
            .returning(|| panic!("provider exploded"));
        news.expect_fetch_football_news().returning(Vec::new);

        let mut run_log_repo = MockRunLogRepositoryTrait::new();
        run_log_repo
            .expect_record()
            .withf(|log| log.status == RunStatus::Error)
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("database down")));

        let app = create_test_app(
            Config::default(),
            news,
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            run_log_repo,
        );

        let (status, body) = call(app, "/api/cron/update-news", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_manual_update_relays_refresh_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cron/update-news"))
            .and(header("authorization", format!("Bearer {}", SECRET).as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "inserted": 4})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let app = create_test_app(
            Config::default()
                .with_cron_secret(SECRET)
                .with_public_base_url(server.uri()),
            idle_news(),
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            MockRunLogRepositoryTrait::new(),
        );

        let (status, body) = call(app, "/api/manual-update-news", Some(SECRET)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Manual news update triggered");
        assert_eq!(body["result"], json!({"success": true, "inserted": 4}));
    }

    #[tokio::test]
    async fn test_manual_update_relays_failed_run_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cron/update-news"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let app = create_test_app(
            Config::default().with_public_base_url(server.uri()),
            idle_news(),
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            MockRunLogRepositoryTrait::new(),
        );

        let (status, body) = call(app, "/api/manual-update-news", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!({"success": false}));
    }

    #[tokio::test]
    async fn test_manual_update_unreachable_endpoint() {
        // Nothing listens on port 9 locally
        let app = create_test_app(
            Config::default().with_public_base_url("http://127.0.0.1:9"),
            idle_news(),
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            MockRunLogRepositoryTrait::new(),
        );

        let (status, body) = call(app, "/api/manual-update-news", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_manual_update_requires_secret() {
        let app = create_test_app(
            Config::default().with_cron_secret(SECRET),
            idle_news(),
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            MockRunLogRepositoryTrait::new(),
        );

        let (status, _) = call(app, "/api/manual-update-news", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_run_logs() {
        let mut run_log_repo = MockRunLogRepositoryTrait::new();
        run_log_repo
            .expect_recent()
            .withf(|limit| *limit == RECENT_LOGS_LIMIT)
            .times(1)
            .returning(|_| {
                Ok(vec![RunLog {
                    id: Uuid::new_v4(),
                    status: RunStatus::Skipped,
                    inserted_count: 0,
                    world_fetched: 0,
                    sport_fetched: 0,
                    error_message: Some("no articles fetched".to_string()),
                    created_at: Utc::now(),
                }])
            });

        let app = create_test_app(
            Config::default().with_cron_secret(SECRET),
            idle_news(),
            MockTranslator::new(),
            MockArticleRepositoryTrait::new(),
            run_log_repo,
        );

        let (status, body) = call(app, "/api/cron/logs", Some(SECRET)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["logs"][0]["status"], "skipped");
        assert_eq!(body["logs"][0]["errorMessage"], "no articles fetched");
    }
}

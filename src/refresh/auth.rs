use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{app_state::AppState, refresh::dtos::ErrorResponse};

/// Proof that the caller presented the configured cron secret.
///
/// With no `CRON_SECRET` configured every caller is let through.
#[derive(Debug, Clone, Copy)]
pub struct CronAuthorization;

impl FromRequestParts<AppState> for CronAuthorization {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(secret) = state.config.cron_secret() else {
            return Ok(CronAuthorization);
        };

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));

        match token {
            Some(token) if token == secret => Ok(CronAuthorization),
            Some(_) => {
                warn!("refresh trigger rejected: wrong secret");
                Err(AuthError::InvalidSecret)
            }
            None => {
                warn!("refresh trigger rejected: missing bearer token");
                Err(AuthError::MissingToken)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidSecret,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Unauthorized")),
        )
            .into_response()
    }
}

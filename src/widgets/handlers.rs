use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    app_state::AppState,
    widgets::{
        MatchSummary, WeatherReport,
        weather::{DEFAULT_CITY, DEFAULT_LAT, DEFAULT_LON},
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LiveScoresResponse {
    pub matches: Vec<MatchSummary>,
}

/// Raw strings so a malformed value falls back instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    lat: Option<String>,
    lon: Option<String>,
    city: Option<String>,
}

impl WeatherQuery {
    fn coordinates(&self) -> (f64, f64) {
        let parse = |value: &Option<String>, default: f64| {
            value
                .as_deref()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        };
        (parse(&self.lat, DEFAULT_LAT), parse(&self.lon, DEFAULT_LON))
    }

    fn city(&self) -> &str {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CITY)
    }
}

#[utoipa::path(
    get,
    path = "/api/live-scores",
    tag = "widgets",
    responses(
        (status = 200, description = "Today's fixtures, or a placeholder", body = LiveScoresResponse)
    )
)]
pub async fn live_scores(State(state): State<AppState>) -> Json<LiveScoresResponse> {
    Json(LiveScoresResponse {
        matches: state.live_scores.todays_matches().await,
    })
}

#[utoipa::path(
    get,
    path = "/api/weather",
    tag = "widgets",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Current conditions, or fixed fallback values", body = WeatherReport)
    )
)]
pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherReport> {
    let (lat, lon) = query.coordinates();
    Json(state.weather.current(lat, lon, query.city()).await)
}

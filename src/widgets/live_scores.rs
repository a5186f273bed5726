use chrono::{NaiveDate, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

use crate::{config::Config, fetcher::api_client, widgets::WidgetError};

const MAX_MATCHES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchSummary {
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub league: String,
    pub status: String,
    pub time: String,
}

impl MatchSummary {
    pub fn placeholder() -> Self {
        Self {
            home_team: "Match data unavailable".to_string(),
            away_team: "Please try again later".to_string(),
            home_score: None,
            away_score: None,
            league: "Football".to_string(),
            status: "Unavailable".to_string(),
            time: String::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FixturesResponse {
    #[serde(default)]
    data: Vec<Fixture>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Fixture {
    participants: Vec<Participant>,
    scores: Vec<ScoreEntry>,
    league: Option<Named>,
    state: Option<Named>,
    status: Option<String>,
    starting_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Participant {
    name: Option<String>,
    meta: Option<ParticipantMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParticipantMeta {
    location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Named {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScoreEntry {
    description: Option<String>,
    score: Option<Score>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Score {
    goals: Option<i64>,
    participant: Option<String>,
}

impl Fixture {
    fn team(&self, location: &str, index: usize) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| p.meta.as_ref().and_then(|m| m.location.as_deref()) == Some(location))
            .or_else(|| self.participants.get(index))
            .and_then(|p| p.name.as_deref())
    }

    /// Goals for one side, preferring the "current" score line.
    fn goals(&self, location: &str) -> Option<i64> {
        let for_side = |entry: &&ScoreEntry| {
            entry.score.as_ref().and_then(|s| s.participant.as_deref()) == Some(location)
        };

        self.scores
            .iter()
            .filter(for_side)
            .find(|entry| {
                entry
                    .description
                    .as_deref()
                    .is_some_and(|d| d.eq_ignore_ascii_case("current"))
            })
            .or_else(|| self.scores.iter().find(for_side))
            .and_then(|entry| entry.score.as_ref())
            .and_then(|score| score.goals)
    }

    fn summarize(&self) -> MatchSummary {
        let name = |value: Option<&str>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        MatchSummary {
            home_team: name(self.team("home", 0), "TBD"),
            away_team: name(self.team("away", 1), "TBD"),
            home_score: self.goals("home"),
            away_score: self.goals("away"),
            league: name(
                self.league.as_ref().and_then(|l| l.name.as_deref()),
                "Football",
            ),
            status: name(
                self.state
                    .as_ref()
                    .and_then(|s| s.name.as_deref())
                    .or(self.status.as_deref()),
                "Scheduled",
            ),
            time: self.starting_at.clone().unwrap_or_default(),
        }
    }
}

/// Sportmonks football fixtures client.
#[derive(Clone)]
pub struct LiveScoresClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LiveScoresClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: api_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.sportmonks_base_url(),
            config.sportmonks_api_key().map(str::to_string),
        )
    }

    /// Up to five of today's fixtures, or the single placeholder.
    pub async fn todays_matches(&self) -> Vec<MatchSummary> {
        match self.matches_on(Utc::now().date_naive()).await {
            Ok(matches) => matches,
            Err(WidgetError::MissingKey) => {
                debug!("live scores not configured, serving placeholder");
                vec![MatchSummary::placeholder()]
            }
            Err(e) => {
                warn!("live scores unavailable: {}", e);
                vec![MatchSummary::placeholder()]
            }
        }
    }

    #[instrument(skip(self))]
    async fn matches_on(&self, date: NaiveDate) -> Result<Vec<MatchSummary>, WidgetError> {
        let api_key = self.api_key.as_deref().ok_or(WidgetError::MissingKey)?;
        let date = date.format("%Y-%m-%d").to_string();

        let response = self
            .http
            .get(format!("{}/football/fixtures", self.base_url))
            .query(&[
                ("api_token", api_key),
                ("filter[date]", date.as_str()),
                ("include", "participants;league;scores"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Http { status });
        }

        let body: FixturesResponse = response.json().await?;
        let matches: Vec<MatchSummary> = body
            .data
            .iter()
            .take(MAX_MATCHES)
            .map(Fixture::summarize)
            .collect();

        if matches.is_empty() {
            return Err(WidgetError::Empty);
        }
        Ok(matches)
    }
}

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ProviderConfig;
use crate::models::{CompetitionRef, Fixture, FixtureScore, MatchStatus, TeamRef};
use crate::services::{league_registry, synthetic};

// ── football-data.org structures ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FootballDataMatches {
    #[serde(default)]
    pub matches: Vec<FootballMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballMatch {
    pub id: u64,
    pub utc_date: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_team: MatchTeam,
    pub away_team: MatchTeam,
    pub competition: MatchCompetition,
    #[serde(default)]
    pub score: Option<MatchScore>,
}

#[derive(Debug, Deserialize)]
pub struct MatchTeam {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchCompetition {
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub full_time: Option<Score>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Score {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

impl From<FootballMatch> for Fixture {
    fn from(m: FootballMatch) -> Self {
        let score = m
            .score
            .and_then(|s| s.full_time)
            .filter(|ft| ft.home.is_some() || ft.away.is_some())
            .map(|ft| FixtureScore { home: ft.home, away: ft.away });

        Fixture {
            id: m.id,
            utc_date: m.utc_date,
            status: m.status,
            home_team: TeamRef { id: m.home_team.id, name: m.home_team.name },
            away_team: TeamRef { id: m.away_team.id, name: m.away_team.name },
            competition: CompetitionRef { name: m.competition.name, code: m.competition.code },
            score,
        }
    }
}

// ── Remote call outcome ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Provider { status: StatusCode, body: String },
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What a single request to the provider produced.
#[derive(Debug)]
pub enum RemoteOutcome {
    Matches(Vec<Fixture>),
    Empty,
    Failed(FetchError),
}

/// Decide what the caller gets back. Anything short of a non-empty match
/// list is replaced by synthetic fixtures for the same league code.
pub fn resolve(outcome: RemoteOutcome, league_code: Option<&str>) -> Vec<Fixture> {
    match outcome {
        RemoteOutcome::Matches(fixtures) => {
            tracing::info!("Provider returned {} fixtures", fixtures.len());
            fixtures
        }
        RemoteOutcome::Empty => {
            tracing::warn!("No matches from provider, using synthetic fixtures");
            synthetic::synthesize(league_code)
        }
        RemoteOutcome::Failed(FetchError::Transport(e)) if e.is_timeout() => {
            tracing::warn!("Provider request timed out ({}), using synthetic fixtures", e);
            synthetic::synthesize(league_code)
        }
        RemoteOutcome::Failed(e) => {
            tracing::warn!("Error fetching matches: {}, using synthetic fixtures", e);
            synthetic::synthesize(league_code)
        }
    }
}

// ── MatchDataProvider ───────────────────────────────────────────────────────

pub struct MatchDataProvider {
    client: Client,
    config: ProviderConfig,
}

impl MatchDataProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Upcoming fixtures for `league_code` (or every competition when the code
    /// is absent or unknown). Never fails: provider trouble of any kind is
    /// answered with synthetic fixtures.
    pub async fn fetch(
        &self,
        league_code: Option<&str>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Vec<Fixture> {
        let outcome = self.request(league_code, date_from, date_to).await;
        resolve(outcome, league_code)
    }

    /// Issue the single GET against football-data.org and classify the result.
    pub async fn request(
        &self,
        league_code: Option<&str>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> RemoteOutcome {
        match self.try_request(league_code, date_from, date_to).await {
            Ok(fixtures) if fixtures.is_empty() => RemoteOutcome::Empty,
            Ok(fixtures) => RemoteOutcome::Matches(fixtures),
            Err(e) => RemoteOutcome::Failed(e),
        }
    }

    pub fn matches_url(&self, league_code: Option<&str>) -> String {
        match league_code.and_then(league_registry::lookup) {
            Some(league) => format!(
                "{}/competitions/{}/matches",
                self.config.base_url, league.provider_id
            ),
            None => format!("{}/matches", self.config.base_url),
        }
    }

    async fn try_request(
        &self,
        league_code: Option<&str>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<Fixture>, FetchError> {
        let url = self.matches_url(league_code);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(d) = date_from {
            params.push(("dateFrom", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = date_to {
            params.push(("dateTo", d.format("%Y-%m-%d").to_string()));
        }

        tracing::debug!("GET {} {:?}", url, params);

        let response = self.client
            .get(&url)
            .header("X-Auth-Token", self.config.api_token.as_str())
            .query(&params)
            .send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Provider { status, body });
        }

        let body = response.text().await?;
        let data: FootballDataMatches = serde_json::from_str(&body)?;

        Ok(data.matches.into_iter().map(Fixture::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> MatchDataProvider {
        let config = ProviderConfig::new("test-token")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(500));
        MatchDataProvider::new(config).unwrap()
    }

    fn provider_match(id: u64, home: &str, away: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "utcDate": "2026-10-20T19:00:00Z",
            "status": "TIMED",
            "matchday": 9,
            "homeTeam": { "id": 57, "name": home, "shortName": "ARS" },
            "awayTeam": { "id": 61, "name": away, "shortName": "CHE" },
            "competition": { "id": 2021, "name": "Premier League", "code": "PL" },
            "score": { "winner": null, "fullTime": { "home": null, "away": null } }
        })
    }

    fn home_names(fixtures: &[Fixture]) -> Vec<&str> {
        fixtures.iter().map(|f| f.home_team.name.as_deref().unwrap()).collect()
    }

    #[tokio::test]
    async fn test_returns_provider_matches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/competitions/2021/matches"))
            .and(header("X-Auth-Token", "test-token"))
            .and(query_param("dateFrom", "2026-10-18"))
            .and(query_param("dateTo", "2026-10-25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "matches": [provider_match(537_001, "Arsenal FC", "Chelsea FC")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let from = NaiveDate::from_ymd_opt(2026, 10, 18);
        let to = NaiveDate::from_ymd_opt(2026, 10, 25);
        let fixtures = provider.fetch(Some("PL"), from, to).await;

        assert_eq!(fixtures.len(), 1);
        let f = &fixtures[0];
        assert_eq!(f.id, 537_001);
        assert_eq!(f.status, MatchStatus::Timed);
        assert_eq!(f.home_team.name.as_deref(), Some("Arsenal FC"));
        assert_eq!(f.away_team.id, Some(61));
        assert_eq!(f.competition.code.as_deref(), Some("PL"));
        assert!(f.score.is_none());
    }

    #[tokio::test]
    async fn test_unknown_league_queries_all_matches_without_dates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "matches": [provider_match(1, "Arsenal FC", "Chelsea FC")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let fixtures = provider.fetch(Some("SA"), None, None).await;
        assert_eq!(fixtures.len(), 1);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_server_error_falls_back_to_synthetic_league() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let fixtures = provider.fetch(Some("PL"), None, None).await;

        assert_eq!(home_names(&fixtures), vec!["Manchester United", "Arsenal", "Manchester City", "Newcastle"]);
        assert_eq!(fixtures.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1000, 1001, 1002, 1003]);
        assert!(fixtures.iter().all(|f| f.status == MatchStatus::Scheduled && f.score.is_none()));
    }

    #[tokio::test]
    async fn test_empty_match_list_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "matches": [] })))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let outcome = provider.request(Some("CL"), None, None).await;
        assert!(matches!(outcome, RemoteOutcome::Empty));

        let fixtures = provider.fetch(None, None, None).await;
        assert_eq!(fixtures.len(), 20);
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let outcome = provider.request(Some("PD"), None, None).await;
        assert!(matches!(outcome, RemoteOutcome::Failed(FetchError::Decode(_))));

        let fixtures = provider.fetch(Some("PD"), None, None).await;
        assert_eq!(fixtures.len(), 4);
        assert_eq!(fixtures[0].competition.name.as_deref(), Some("La Liga"));
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "matches": [provider_match(1, "A", "B")] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let outcome = provider.request(Some("EC"), None, None).await;
        match outcome {
            RemoteOutcome::Failed(FetchError::Transport(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_still_returns_fixtures_for_every_league() {
        // Nothing listens on port 9 locally, so every request fails to connect.
        let config = ProviderConfig::new("").with_base_url("http://127.0.0.1:9");
        let provider = MatchDataProvider::new(config).unwrap();

        for league in league_registry::all() {
            let fixtures = provider.fetch(Some(league.code), None, None).await;
            assert!(!fixtures.is_empty(), "{} returned nothing", league.code);

            let ids: HashSet<_> = fixtures.iter().map(|f| f.id).collect();
            assert_eq!(ids.len(), fixtures.len());
            assert!(fixtures.iter().all(|f| f.home_team.id != f.away_team.id));
        }
    }

    #[test]
    fn test_resolve_passes_matches_through() {
        let fixtures = synthetic::synthesize(Some("CL"));
        let resolved = resolve(RemoteOutcome::Matches(fixtures.clone()), Some("PL"));
        assert_eq!(resolved, fixtures);
    }

    #[test]
    fn test_resolve_provider_error_uses_same_league() {
        let outcome = RemoteOutcome::Failed(FetchError::Provider {
            status: StatusCode::FORBIDDEN,
            body: "restricted".into(),
        });
        let resolved = resolve(outcome, Some("BL1"));
        assert_eq!(resolved.len(), 4);
        assert!(resolved.iter().all(|f| f.competition.code.as_deref() == Some("BL1")));
    }

    #[test]
    fn test_finished_match_keeps_full_time_score() {
        let mut raw = provider_match(5, "Arsenal FC", "Chelsea FC");
        raw["status"] = "FINISHED".into();
        raw["score"]["fullTime"] = serde_json::json!({ "home": 2, "away": 1 });

        let m: FootballMatch = serde_json::from_value(raw).unwrap();
        let fixture = Fixture::from(m);
        assert_eq!(fixture.status, MatchStatus::Finished);
        assert_eq!(fixture.score, Some(FixtureScore { home: Some(2), away: Some(1) }));
    }

    #[test]
    fn test_matches_url() {
        let provider = MatchDataProvider::new(ProviderConfig::default()).unwrap();
        assert_eq!(
            provider.matches_url(Some("CL")),
            "https://api.football-data.org/v4/competitions/2001/matches"
        );
        assert_eq!(provider.matches_url(None), "https://api.football-data.org/v4/matches");
    }
}

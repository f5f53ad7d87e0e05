use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A competition known to the provider. Defined statically, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct League {
    pub code: &'static str,
    pub provider_id: u32,
    pub display_name: &'static str,
    /// Representative fixtures used when the provider has nothing to offer.
    #[serde(skip)]
    pub showcase_pairs: [(&'static str, &'static str); 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Cancelled,
    Awarded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRef {
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureScore {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// One match, either reshaped from the provider or synthesized locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u64,
    pub utc_date: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub competition: CompetitionRef,
    pub score: Option<FixtureScore>, // None until the match has a result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedScore {
    pub home: u32,
    pub away: u32,
}

impl PredictedScore {
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn total(&self) -> u32 {
        self.home + self.away
    }
}

impl fmt::Display for PredictedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsForecast {
    pub total_goals: u32,
    pub over_2_5: bool,
    pub both_teams_score: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsForecast {
    pub corners: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub possession_home: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub match_id: u64,
    pub home_team: String,
    pub away_team: String,
    #[serde(rename = "date")]
    pub kickoff_date: DateTime<Utc>,
    #[serde(rename = "competition")]
    pub competition_name: String,
    pub predicted_score: PredictedScore,
    pub predicted_result: String,
    pub confidence: String,
    #[serde(rename = "goals_prediction")]
    pub goals_forecast: GoalsForecast,
    #[serde(rename = "stats_prediction")]
    pub stats_forecast: StatsForecast,
}

// API Response types
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastList {
    pub count: usize,
    pub predictions: Vec<Forecast>,
}

impl From<Vec<Forecast>> for ForecastList {
    fn from(predictions: Vec<Forecast>) -> Self {
        Self {
            count: predictions.len(),
            predictions,
        }
    }
}

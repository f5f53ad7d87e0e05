use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Fixture, Forecast, GoalsForecast, PredictedScore, StatsForecast};

/// Scorelines drawn from when forecasting a match.
pub const LIKELY_SCORES: [PredictedScore; 10] = [
    PredictedScore::new(1, 0),
    PredictedScore::new(2, 0),
    PredictedScore::new(2, 1),
    PredictedScore::new(1, 1),
    PredictedScore::new(0, 0),
    PredictedScore::new(3, 0),
    PredictedScore::new(3, 1),
    PredictedScore::new(0, 1),
    PredictedScore::new(1, 2),
    PredictedScore::new(0, 2),
];

pub const CORNERS: (u32, u32) = (8, 14);
pub const FOULS: (u32, u32) = (12, 25);
pub const YELLOW_CARDS: (u32, u32) = (2, 6);
pub const POSSESSION_HOME: (u32, u32) = (40, 60);

const HOME_PLACEHOLDER: &str = "Home Team";
const AWAY_PLACEHOLDER: &str = "Away Team";
const COMPETITION_PLACEHOLDER: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn of(score: PredictedScore) -> Self {
        match score.home.cmp(&score.away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Fixed per category; not derived from the sampled score.
    pub fn confidence_pct(self) -> u32 {
        match self {
            Outcome::HomeWin => 45,
            Outcome::AwayWin => 30,
            Outcome::Draw => 25,
        }
    }

    pub fn label(self, home_team: &str, away_team: &str) -> String {
        match self {
            Outcome::HomeWin => format!("{} wins", home_team),
            Outcome::AwayWin => format!("{} wins", away_team),
            Outcome::Draw => "Draw".to_string(),
        }
    }
}

/// Placeholder forecaster: realistic-looking numbers, no model behind them.
///
/// All randomness comes from the one RNG held here, so a seeded engine
/// replays the same forecasts. The mutex lets a single engine serve
/// concurrent requests.
pub struct ForecastEngine {
    rng: Mutex<StdRng>,
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn forecast(&self, fixture: &Fixture) -> Forecast {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        forecast_with(fixture, &mut *rng)
    }

    pub fn forecast_all(&self, fixtures: &[Fixture]) -> Vec<Forecast> {
        let forecasts: Vec<Forecast> = fixtures.iter().map(|f| self.forecast(f)).collect();
        tracing::debug!("Generated {} forecasts", forecasts.len());
        forecasts
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a scoreline and match statistics from `rng` and assemble the forecast.
pub fn forecast_with<R: Rng>(fixture: &Fixture, rng: &mut R) -> Forecast {
    let score = *LIKELY_SCORES.choose(rng).unwrap_or(&LIKELY_SCORES[0]);

    let stats = StatsForecast {
        corners: rng.gen_range(CORNERS.0..=CORNERS.1),
        fouls: rng.gen_range(FOULS.0..=FOULS.1),
        yellow_cards: rng.gen_range(YELLOW_CARDS.0..=YELLOW_CARDS.1),
        possession_home: rng.gen_range(POSSESSION_HOME.0..=POSSESSION_HOME.1),
    };

    build_forecast(fixture, score, stats)
}

/// Deterministic part of a forecast: everything that follows from the
/// sampled score plus the fields copied from the fixture.
pub fn build_forecast(fixture: &Fixture, score: PredictedScore, stats: StatsForecast) -> Forecast {
    let home_team = fixture.home_team.name.clone().unwrap_or_else(|| HOME_PLACEHOLDER.to_string());
    let away_team = fixture.away_team.name.clone().unwrap_or_else(|| AWAY_PLACEHOLDER.to_string());

    let outcome = Outcome::of(score);
    let total_goals = score.total();

    Forecast {
        match_id: fixture.id,
        predicted_result: outcome.label(&home_team, &away_team),
        home_team,
        away_team,
        kickoff_date: fixture.utc_date,
        competition_name: fixture
            .competition
            .name
            .clone()
            .unwrap_or_else(|| COMPETITION_PLACEHOLDER.to_string()),
        predicted_score: score,
        confidence: format!("{}%", outcome.confidence_pct()),
        goals_forecast: GoalsForecast {
            total_goals,
            // Compared against the half-goal line even though totals are whole.
            over_2_5: f64::from(total_goals) > 2.5,
            both_teams_score: score.home > 0 && score.away > 0,
        },
        stats_forecast: stats,
    }
}

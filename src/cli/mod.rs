use anyhow::Result;
use chrono::NaiveDate;

use crate::config::ProviderConfig;
use crate::models::{Fixture, MatchStatus};
use crate::services::{league_registry, ForecastEngine, MatchDataProvider};
use crate::utils::format_kickoff;

fn warn_if_unknown(league: Option<&str>) {
    if let Some(code) = league {
        if league_registry::lookup(code).is_none() {
            println!("⚠️  Unknown league '{}', showing all competitions", code);
        }
    }
}

fn team_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("TBD")
}

pub async fn fetch_fixtures(
    config: ProviderConfig,
    league: Option<&str>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> Result<()> {
    let provider = MatchDataProvider::new(config)?;
    warn_if_unknown(league);

    println!("📥 Fetching fixtures...");
    let fixtures = provider.fetch(league, date_from, date_to).await;

    if fixtures.is_empty() {
        println!("📭 No fixtures found.");
        return Ok(());
    }

    println!("📅 {} fixtures:\n", fixtures.len());
    for fixture in &fixtures {
        print_fixture(fixture);
    }

    Ok(())
}

fn print_fixture(fixture: &Fixture) {
    let score = match fixture.score {
        Some(s) => format!(
            "({}-{})",
            s.home.map_or("?".to_string(), |h| h.to_string()),
            s.away.map_or("?".to_string(), |a| a.to_string())
        ),
        None => String::new(),
    };
    let status = if fixture.status == MatchStatus::Scheduled { "" } else { " *" };

    println!("   #{} {} {} vs {} [{}] {}{}",
        fixture.id,
        format_kickoff(fixture.utc_date),
        team_name(&fixture.home_team.name),
        team_name(&fixture.away_team.name),
        fixture.competition.code.as_deref().unwrap_or("?"),
        score,
        status
    );
}

pub async fn generate_predictions(
    config: ProviderConfig,
    league: Option<&str>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    limit: usize,
) -> Result<()> {
    let provider = MatchDataProvider::new(config)?;
    let engine = ForecastEngine::new();
    warn_if_unknown(league);

    println!("🔮 Generating predictions for upcoming matches...");

    let fixtures = provider.fetch(league, date_from, date_to).await;
    let take = fixtures.len().min(limit);
    let forecasts = engine.forecast_all(&fixtures[..take]);

    if forecasts.is_empty() {
        println!("📭 No upcoming matches found.");
        return Ok(());
    }

    println!("✅ Generated predictions for {} matches!\n", forecasts.len());

    for (i, forecast) in forecasts.iter().enumerate() {
        println!("{}. {} vs {} ({}, {}):",
            i + 1,
            forecast.home_team,
            forecast.away_team,
            forecast.competition_name,
            format_kickoff(forecast.kickoff_date)
        );
        println!("   Score: {} | {} ({})",
            forecast.predicted_score,
            forecast.predicted_result,
            forecast.confidence
        );
        println!("   Goals: {} | Over 2.5: {} | Both score: {}",
            forecast.goals_forecast.total_goals,
            yes_no(forecast.goals_forecast.over_2_5),
            yes_no(forecast.goals_forecast.both_teams_score)
        );
        let stats = &forecast.stats_forecast;
        println!("   Corners: {} | Fouls: {} | Yellow cards: {} | Possession: {}% - {}%\n",
            stats.corners,
            stats.fouls,
            stats.yellow_cards,
            stats.possession_home,
            100 - stats.possession_home
        );
    }

    println!("⚠️  Note: forecasts are randomly sampled placeholders, not model output.");

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn show_leagues() {
    println!("🏆 Available Leagues:\n");

    for league in league_registry::all() {
        println!("   • {:<4} {} (provider id {})", league.code, league.display_name, league.provider_id);
    }

    println!("\n💡 Use 'matchday predict --league <code>' to forecast a league");
    println!("💡 Use 'matchday fetch --league <code>' to list its fixtures");
}

use chrono::{DateTime, Duration, SubsecRound, Utc};

use crate::models::{CompetitionRef, Fixture, League, MatchStatus, TeamRef};
use crate::services::league_registry;

const FIRST_FIXTURE_ID: u64 = 1000;
const HOME_TEAM_ID_BASE: u64 = 100;
const AWAY_TEAM_ID_BASE: u64 = 200;
const KICKOFF_SPACING_HOURS: i64 = 3;

/// Stand-in fixtures for when football-data.org is unreachable or empty.
pub fn synthesize(league_code: Option<&str>) -> Vec<Fixture> {
    synthesize_at(league_code, Utc::now().trunc_subsecs(0))
}

/// Same as [`synthesize`] with an explicit clock.
///
/// A known code yields that league's four showcase fixtures; anything else
/// yields four per registered league. League `i` starts `i` days after `now`
/// and its fixtures are three hours apart.
pub fn synthesize_at(league_code: Option<&str>, now: DateTime<Utc>) -> Vec<Fixture> {
    let leagues: Vec<&League> = match league_code.and_then(league_registry::lookup) {
        Some(league) => vec![league],
        None => league_registry::all().iter().collect(),
    };

    let mut fixtures = Vec::with_capacity(leagues.len() * 4);

    for (league_idx, league) in leagues.iter().enumerate() {
        for (pair_idx, (home, away)) in league.showcase_pairs.iter().enumerate() {
            let position = fixtures.len() as u64;
            let kickoff = now
                + Duration::days(league_idx as i64)
                + Duration::hours(pair_idx as i64 * KICKOFF_SPACING_HOURS);

            fixtures.push(Fixture {
                id: FIRST_FIXTURE_ID + position,
                utc_date: kickoff,
                status: MatchStatus::Scheduled,
                home_team: TeamRef {
                    id: Some(HOME_TEAM_ID_BASE + position),
                    name: Some(home.to_string()),
                },
                away_team: TeamRef {
                    id: Some(AWAY_TEAM_ID_BASE + position),
                    name: Some(away.to_string()),
                },
                competition: CompetitionRef {
                    name: Some(league.display_name.to_string()),
                    code: Some(league.code.to_string()),
                },
                score: None,
            });
        }
    }

    fixtures
}

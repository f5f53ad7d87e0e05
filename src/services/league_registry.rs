use crate::models::League;

/// Competitions we forecast, in the order synthetic fixtures are laid out.
pub static LEAGUES: [League; 5] = [
    League {
        code: "CL",
        provider_id: 2001,
        display_name: "UEFA Champions League",
        showcase_pairs: [
            ("Real Madrid", "Bayern Munich"),
            ("Manchester City", "Paris Saint-Germain"),
            ("Barcelona", "Inter Milan"),
            ("Liverpool", "AC Milan"),
        ],
    },
    League {
        code: "PL",
        provider_id: 2021,
        display_name: "Premier League",
        showcase_pairs: [
            ("Manchester United", "Chelsea"),
            ("Arsenal", "Liverpool"),
            ("Manchester City", "Tottenham"),
            ("Newcastle", "Aston Villa"),
        ],
    },
    League {
        code: "PD",
        provider_id: 2014,
        display_name: "La Liga",
        showcase_pairs: [
            ("Real Madrid", "Barcelona"),
            ("Atletico Madrid", "Sevilla"),
            ("Valencia", "Real Sociedad"),
            ("Villarreal", "Athletic Bilbao"),
        ],
    },
    League {
        code: "BL1",
        provider_id: 2002,
        display_name: "Bundesliga",
        showcase_pairs: [
            ("Bayern Munich", "Borussia Dortmund"),
            ("RB Leipzig", "Bayer Leverkusen"),
            ("Eintracht Frankfurt", "VfL Wolfsburg"),
            ("SC Freiburg", "Union Berlin"),
        ],
    },
    League {
        code: "EC",
        provider_id: 2018,
        display_name: "European Championship",
        showcase_pairs: [
            ("Spain", "Germany"),
            ("France", "England"),
            ("Italy", "Portugal"),
            ("Netherlands", "Belgium"),
        ],
    },
];

/// Look up a league by its short code. Codes are matched exactly ("PL", not "pl").
pub fn lookup(code: &str) -> Option<&'static League> {
    LEAGUES.iter().find(|l| l.code == code)
}

pub fn all() -> &'static [League] {
    &LEAGUES
}

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Inclusive `[start, start + days]` window, as the provider's `dateFrom`/`dateTo` expect.
pub fn date_window(start: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (start, start + Duration::days(days))
}

/// Fill in whichever end of a requested range is missing.
pub fn resolve_window(
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    default_days: i64,
) -> (NaiveDate, NaiveDate) {
    let from = date_from.unwrap_or_else(today);
    let to = date_to.unwrap_or_else(|| date_window(today(), default_days).1);
    (from, to)
}

pub fn format_kickoff(kickoff: DateTime<Utc>) -> String {
    kickoff.format("%Y-%m-%d %H:%M UTC").to_string()
}

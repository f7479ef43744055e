use chrono::NaiveDate;

use super::error::{AnalyticsError, AnalyticsResult};
use super::validate::validate_teams;
use crate::domain::team::Team;

/// Selects the teams whose date falls within `[start, end]`
///
/// Both bounds are inclusive; an absent bound leaves that side open, so
/// with both bounds absent every team passes. Relative input order is
/// preserved.
///
/// Fails with `TeamListEmpty` when the input collection is empty and with
/// `PeriodEmpty` when filtering leaves nothing — distinct conditions the
/// caller can tell apart.
pub fn filter_by_period(
    teams: &[Team],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AnalyticsResult<Vec<&Team>> {
    validate_teams(teams)?;

    let filtered: Vec<&Team> = teams
        .iter()
        .filter(|team| {
            let date = team.date();
            let after_start = start.map_or(true, |s| date >= s);
            let before_end = end.map_or(true, |e| date <= e);
            after_start && before_end
        })
        .collect();

    if filtered.is_empty() {
        return Err(AnalyticsError::PeriodEmpty);
    }

    Ok(filtered)
}

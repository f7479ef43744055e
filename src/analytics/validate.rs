use chrono::NaiveDate;

use super::error::{AnalyticsError, AnalyticsResult};
use crate::domain::team::Team;

/// Rejects an absent date
pub fn validate_date(date: Option<NaiveDate>) -> AnalyticsResult<NaiveDate> {
    date.ok_or(AnalyticsError::DateMissing)
}

/// Rejects a range with either bound absent
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AnalyticsResult<(NaiveDate, NaiveDate)> {
    Ok((validate_date(start)?, validate_date(end)?))
}

/// Rejects an empty team collection
///
/// Used both for the full collection (pre-filter) and for filtered
/// subsets where the caller wants the same failure kind.
pub fn validate_teams(teams: &[Team]) -> AnalyticsResult<()> {
    if teams.is_empty() {
        return Err(AnalyticsError::TeamListEmpty);
    }
    Ok(())
}

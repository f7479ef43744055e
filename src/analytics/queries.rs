use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::aggregate::{group_and_count, mode};
use super::error::{AnalyticsError, AnalyticsResult};
use super::period::filter_by_period;
use super::validate::{validate_date, validate_teams};
use crate::domain::member::Member;
use crate::domain::team::{CompositionEntry, Team};

// The item lifetime is the teams' own borrow, not the slice's, so callers
// can keep entries after a local Vec of filtered references goes away.
fn entries<'a, 'b>(teams: &'b [&'a Team]) -> impl Iterator<Item = &'a CompositionEntry> + 'b {
    teams.iter().flat_map(|team| team.composition().iter())
}

/// Names of the members fielded on the given date, in composition order
///
/// Takes the first team with an exact date match when duplicates share a
/// date (stored order decides).
pub fn team_of_date(date: Option<NaiveDate>, teams: &[Team]) -> AnalyticsResult<Vec<String>> {
    let date = validate_date(date)?;
    validate_teams(teams)?;

    teams
        .iter()
        .find(|team| team.date() == date)
        .map(Team::member_names)
        .ok_or(AnalyticsError::DateNotFound(date))
}

/// The member appearing in the most compositions within the period
///
/// Members are compared by id. Ties go to the member with the smallest id
/// (the mode selector's documented rule).
pub fn most_used_member(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    teams: &[Team],
) -> AnalyticsResult<Member> {
    let filtered = filter_by_period(teams, start, end)?;

    let counts = group_and_count(entries(&filtered), |entry| entry.member().id)?;
    let winner = *mode(&counts)?;

    let member = entries(&filtered)
        .find(|entry| entry.member().id == winner)
        .map(|entry| entry.member().clone());

    member.ok_or(AnalyticsError::EmptyAggregate)
}

/// Member names of the line-up fielded most often within the period
///
/// Teams group by composition identity (sorted member ids), so two stored
/// teams with the same line-up count as one team.
pub fn most_common_team(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    teams: &[Team],
) -> AnalyticsResult<Vec<String>> {
    let filtered = filter_by_period(teams, start, end)?;

    let counts = group_and_count(filtered.iter(), |team| team.composition_signature())?;
    let winner = mode(&counts)?;

    filtered
        .iter()
        .find(|team| &team.composition_signature() == winner)
        .map(|team| team.member_names())
        .ok_or(AnalyticsError::EmptyAggregate)
}

/// The most common role across compositions within the period
pub fn most_common_role(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    teams: &[Team],
) -> AnalyticsResult<String> {
    let filtered = filter_by_period(teams, start, end)?;

    let counts = group_and_count(entries(&filtered), |entry| entry.member().role.clone())?;

    Ok(mode(&counts)?.clone())
}

/// The most common franchise across compositions within the period
pub fn most_famous_franchise(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    teams: &[Team],
) -> AnalyticsResult<String> {
    let filtered = filter_by_period(teams, start, end)?;

    let counts = group_and_count(entries(&filtered), |entry| entry.member().franchise.clone())?;

    Ok(mode(&counts)?.clone())
}

/// Appearance count per franchise within the period
pub fn count_by_franchise(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    teams: &[Team],
) -> AnalyticsResult<BTreeMap<String, u64>> {
    let filtered = filter_by_period(teams, start, end)?;

    group_and_count(entries(&filtered), |entry| entry.member().franchise.clone())
}

/// Appearance count per role within the period
pub fn count_by_role(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    teams: &[Team],
) -> AnalyticsResult<BTreeMap<String, u64>> {
    let filtered = filter_by_period(teams, start, end)?;

    group_and_count(entries(&filtered), |entry| entry.member().role.clone())
}

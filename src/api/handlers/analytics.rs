use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::members::MemberResponse;
use crate::analytics as engine;
use crate::analytics::validate_date_range;
use crate::api::errors::ApiError;
use crate::api::AppState;

/// Query string for exact-date lookups
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(rename = "data")]
    pub date: Option<NaiveDate>,
}

/// Query string for period-bounded queries
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    #[serde(rename = "dataInicial")]
    pub start: Option<NaiveDate>,
    #[serde(rename = "dataFinal")]
    pub end: Option<NaiveDate>,
}

impl PeriodQuery {
    /// Both bounds are mandatory at this boundary even though the engine
    /// accepts open ones; a missing bound is a client error.
    fn into_bounds(self) -> Result<(NaiveDate, NaiveDate), ApiError> {
        Ok(validate_date_range(self.start, self.end)?)
    }
}

#[derive(Debug, Serialize)]
pub struct TeamOfDateResponse {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "integrantes")]
    pub members: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MostCommonRoleResponse {
    #[serde(rename = "funcao")]
    pub role: String,
}

/// Member names of the team fielded on the given date
///
/// GET /times/data?data=YYYY-MM-DD
pub async fn team_of_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<TeamOfDateResponse>, ApiError> {
    let date = engine::validate_date(query.date)?;
    let teams = state.teams.find_all().await?;

    let names = engine::team_of_date(Some(date), &teams)?;

    Ok(Json(TeamOfDateResponse {
        date,
        members: names,
    }))
}

/// The member used in the most compositions within the period
///
/// GET /integrante-mais-usado?dataInicial=&dataFinal=
pub async fn most_used_member(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<MemberResponse>, ApiError> {
    let (start, end) = query.into_bounds()?;
    let teams = state.teams.find_all().await?;

    let member = engine::most_used_member(Some(start), Some(end), &teams)?;

    Ok(Json(MemberResponse::from(&member)))
}

/// Member names of the most repeated line-up within the period
///
/// GET /time-mais-comum?dataInicial=&dataFinal=
pub async fn most_common_team(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let (start, end) = query.into_bounds()?;
    let teams = state.teams.find_all().await?;

    let names = engine::most_common_team(Some(start), Some(end), &teams)?;

    Ok(Json(names))
}

/// The most common role within the period
///
/// GET /funcao-mais-comum?dataInicial=&dataFinal=
pub async fn most_common_role(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<MostCommonRoleResponse>, ApiError> {
    let (start, end) = query.into_bounds()?;
    let teams = state.teams.find_all().await?;

    let role = engine::most_common_role(Some(start), Some(end), &teams)?;

    Ok(Json(MostCommonRoleResponse { role }))
}

/// The most famous franchise within the period
///
/// GET /franquia-mais-famosa?dataInicial=&dataFinal=
pub async fn most_famous_franchise(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<String>, ApiError> {
    let (start, end) = query.into_bounds()?;
    let teams = state.teams.find_all().await?;

    let franchise = engine::most_famous_franchise(Some(start), Some(end), &teams)?;

    Ok(Json(franchise))
}

/// Appearance count per franchise within the period
///
/// GET /contagem-por-franquia?dataInicial=&dataFinal=
pub async fn count_by_franchise(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<BTreeMap<String, u64>>, ApiError> {
    let (start, end) = query.into_bounds()?;
    let teams = state.teams.find_all().await?;

    let counts = engine::count_by_franchise(Some(start), Some(end), &teams)?;

    Ok(Json(counts))
}

/// Appearance count per role within the period
///
/// GET /contagem-por-funcao?dataInicial=&dataFinal=
pub async fn count_by_role(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<BTreeMap<String, u64>>, ApiError> {
    let (start, end) = query.into_bounds()?;
    let teams = state.teams.find_all().await?;

    let counts = engine::count_by_role(Some(start), Some(end), &teams)?;

    Ok(Json(counts))
}

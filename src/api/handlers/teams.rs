use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::members::MemberResponse;
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::member::Member;
use crate::domain::team::{Team, TeamError};

/// Request body for creating or updating a team
///
/// Field names match the reference system's wire format.
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "idsIntegrantes")]
    pub member_ids: Vec<Uuid>,
}

/// Team representation returned to clients
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "integrantes")]
    pub members: Vec<MemberResponse>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            date: team.date(),
            members: team
                .composition()
                .iter()
                .map(|entry| MemberResponse::from(entry.member()))
                .collect(),
        }
    }
}

/// Resolves member ids into member records
///
/// Any id that does not resolve fails the whole operation; a team is
/// never created from a partially resolved list.
async fn resolve_members(state: &AppState, ids: &[Uuid]) -> Result<Vec<Member>, ApiError> {
    if ids.is_empty() {
        return Err(TeamError::EmptyComposition.into());
    }

    let members = state.members.find_by_ids(ids).await?;

    if members.len() != ids.len() {
        return Err(TeamError::UnknownMembers.into());
    }

    Ok(members)
}

/// Create a new team from a date and a list of member ids
///
/// POST /time/cadastrar
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let members = resolve_members(&state, &req.member_ids).await?;

    let team = Team::new(req.date, members)?;
    state.teams.save(&team).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List all teams
///
/// GET /time/listar
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.find_all().await?;

    if teams.is_empty() {
        return Err(ApiError::not_found("No teams found"));
    }

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /time/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Replace a team's date and composition
///
/// PUT /time/atualizar/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut team = state
        .teams
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    let members = resolve_members(&state, &req.member_ids).await?;

    team.update(req.date, members)?;
    state.teams.save(&team).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /time/deletar/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.teams.exists(id).await? {
        return Err(ApiError::not_found(format!("Team not found: {}", id)));
    }

    state.teams.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::member::Member;

/// Request body for registering or updating a member
///
/// Field names match the reference system's wire format.
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    #[serde(rename = "franquia")]
    pub franchise: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "funcao")]
    pub role: String,
}

/// Member representation returned to clients
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    #[serde(rename = "franquia")]
    pub franchise: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "funcao")]
    pub role: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            franchise: member.franchise.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
        }
    }
}

/// Register a new member
///
/// POST /integrante/cadastrar
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    // Member names are unique across the whole registry
    if state.members.find_by_name(&req.name).await?.is_some() {
        return Err(ApiError::conflict(format!(
            "A member named {} is already registered",
            req.name
        )));
    }

    let member = Member::new(req.franchise, req.name, req.role);
    state.members.save(&member).await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

/// List all registered members
///
/// GET /integrante/listar
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state.members.find_all().await?;

    if members.is_empty() {
        return Err(ApiError::not_found("No members registered"));
    }

    Ok(Json(members.iter().map(MemberResponse::from).collect()))
}

/// Get a member by ID
///
/// GET /integrante/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    Ok(Json(MemberResponse::from(&member)))
}

/// Update a member's attributes
///
/// PUT /integrante/atualizar/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let mut member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    if let Some(other) = state.members.find_by_name(&req.name).await? {
        if other.id != id {
            return Err(ApiError::conflict(format!(
                "A member named {} is already registered",
                req.name
            )));
        }
    }

    member.franchise = req.franchise;
    member.name = req.name;
    member.role = req.role;
    state.members.save(&member).await?;

    Ok(Json(MemberResponse::from(&member)))
}

/// Delete a member
///
/// DELETE /integrante/excluir/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.members.exists(id).await? {
        return Err(ApiError::not_found(format!("Member not found: {}", id)));
    }

    state.members.delete(id).await?;

    Ok(StatusCode::OK)
}

// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::infrastructure::repositories::{InMemoryMemberRepository, InMemoryTeamRepository};

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberRepository>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    pub fn new(members: Arc<dyn MemberRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { members, teams }
    }

    /// State backed by fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryMemberRepository::new()),
            Arc::new(InMemoryTeamRepository::new()),
        )
    }
}

/// Builds the application router
///
/// Route paths keep the wire surface of the reference system, so the
/// aggregate queries and the CRUD endpoints answer at the same URLs.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Aggregate queries
        .route("/times/data", get(handlers::analytics::team_of_date))
        .route(
            "/integrante-mais-usado",
            get(handlers::analytics::most_used_member),
        )
        .route(
            "/time-mais-comum",
            get(handlers::analytics::most_common_team),
        )
        .route(
            "/funcao-mais-comum",
            get(handlers::analytics::most_common_role),
        )
        .route(
            "/franquia-mais-famosa",
            get(handlers::analytics::most_famous_franchise),
        )
        .route(
            "/contagem-por-franquia",
            get(handlers::analytics::count_by_franchise),
        )
        .route(
            "/contagem-por-funcao",
            get(handlers::analytics::count_by_role),
        )
        // Member CRUD
        .route("/integrante/cadastrar", post(handlers::members::create))
        .route("/integrante/listar", get(handlers::members::list))
        .route("/integrante/:id", get(handlers::members::get_by_id))
        .route("/integrante/atualizar/:id", put(handlers::members::update))
        .route(
            "/integrante/excluir/:id",
            delete(handlers::members::remove),
        )
        // Team CRUD
        .route("/time/cadastrar", post(handlers::teams::create))
        .route("/time/listar", get(handlers::teams::list))
        .route("/time/:id", get(handlers::teams::get_by_id))
        .route("/time/atualizar/:id", put(handlers::teams::update))
        .route("/time/deletar/:id", delete(handlers::teams::remove))
        .with_state(state)
}

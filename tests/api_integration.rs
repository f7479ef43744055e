//! End-to-end API integration tests
//!
//! These tests drive the full router over in-memory stores: member and
//! team CRUD flows, the aggregate-query endpoints, and the status-code
//! mapping for domain failures.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

use roster_api::api::{router, AppState};
use roster_api::domain::member::Member;
use roster_api::domain::team::Team;

/// Set up the application with fresh in-memory state
fn setup_app() -> (Router, AppState) {
    let state = AppState::in_memory();
    (router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

async fn send_json(app: &Router, method: &str, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Store a team directly, bypassing the create endpoint's future-date rule
async fn seed_team(state: &AppState, on: NaiveDate, members: Vec<Member>) {
    let team = Team::from_parts(Uuid::new_v4(), on, members);
    state.teams.save(&team).await.expect("seed team");
}

fn joao() -> Member {
    Member::new("FranquiaA", "João", "Atacante")
}

fn antonio() -> Member {
    Member::new("FranquiaB", "Antonio", "Defensor")
}

fn jonas() -> Member {
    Member::new("FranquiaA", "Jonas", "Atacante")
}

#[tokio::test]
async fn health_check_returns_ok() {
    let (app, _) = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn member_crud_flow() {
    let (app, _) = setup_app();

    // Register
    let payload = json!({"franquia": "FranquiaA", "nome": "João", "funcao": "Atacante"});
    let (status, created) = send_json(&app, "POST", "/integrante/cadastrar", &payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["nome"], "João");
    let id = created["id"].as_str().unwrap().to_string();

    // List
    let (status, listed) = get(&app, "/integrante/listar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Get by id
    let (status, fetched) = get(&app, &format!("/integrante/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["franquia"], "FranquiaA");

    // Update
    let update = json!({"franquia": "FranquiaB", "nome": "João", "funcao": "Defensor"});
    let (status, updated) =
        send_json(&app, "PUT", &format!("/integrante/atualizar/{}", id), &update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["funcao"], "Defensor");

    // Delete, then the lookup misses
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/integrante/excluir/{}", id),
        &Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/integrante/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_member_name_is_rejected() {
    let (app, _) = setup_app();
    let payload = json!({"franquia": "FranquiaA", "nome": "João", "funcao": "Atacante"});

    let (status, _) = send_json(&app, "POST", "/integrante/cadastrar", &payload).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, "POST", "/integrante/cadastrar", &payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("João"));
}

#[tokio::test]
async fn listing_members_before_any_registration_returns_404() {
    let (app, _) = setup_app();

    let (status, _) = get(&app, "/integrante/listar").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn team_create_flow() {
    let (app, state) = setup_app();

    let a = joao();
    let b = antonio();
    state.members.save(&a).await.unwrap();
    state.members.save(&b).await.unwrap();

    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    let payload = json!({"data": tomorrow, "idsIntegrantes": [a.id, b.id]});

    let (status, created) = send_json(&app, "POST", "/time/cadastrar", &payload).await;

    assert_eq!(status, StatusCode::CREATED);
    let names: Vec<&str> = created["integrantes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["João", "Antonio"]);

    let (status, listed) = get(&app, "/time/listar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn team_create_with_unresolved_member_id_fails() {
    let (app, state) = setup_app();

    let a = joao();
    state.members.save(&a).await.unwrap();

    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    let payload = json!({"data": tomorrow, "idsIntegrantes": [a.id, Uuid::new_v4()]});

    let (status, _) = send_json(&app, "POST", "/time/cadastrar", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn team_create_in_the_past_fails() {
    let (app, state) = setup_app();

    let a = joao();
    state.members.save(&a).await.unwrap();

    let payload = json!({"data": "2020-01-01", "idsIntegrantes": [a.id]});

    let (status, _) = send_json(&app, "POST", "/time/cadastrar", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn team_update_replaces_composition() {
    let (app, state) = setup_app();

    let a = joao();
    let b = antonio();
    state.members.save(&a).await.unwrap();
    state.members.save(&b).await.unwrap();

    let on = date(2024, 12, 13);
    let team = Team::from_parts(Uuid::new_v4(), on, vec![a]);
    state.teams.save(&team).await.unwrap();

    let payload = json!({"data": "2024-12-14", "idsIntegrantes": [b.id]});
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/time/atualizar/{}", team.id()),
        &payload,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"], "2024-12-14");
    assert_eq!(updated["integrantes"][0]["nome"], "Antonio");
}

#[tokio::test]
async fn team_delete_returns_no_content() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 12, 13), vec![joao()]).await;

    let id = state.teams.find_all().await.unwrap()[0].id();
    let (status, _) = send_json(&app, "DELETE", &format!("/time/deletar/{}", id), &Value::Null).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, "/time/listar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn team_of_date_returns_composition_names() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 12, 13), vec![joao(), antonio()]).await;

    let (status, body) = get(&app, "/times/data?data=2024-12-13").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "2024-12-13");
    assert_eq!(body["integrantes"], json!(["João", "Antonio"]));
}

#[tokio::test]
async fn team_of_date_with_unknown_date_returns_404() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 12, 13), vec![joao()]).await;

    let (status, _) = get(&app, "/times/data?data=2024-10-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn team_of_date_without_date_param_returns_400() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 12, 13), vec![joao()]).await;

    let (status, _) = get(&app, "/times/data").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn most_used_member_wins_by_appearance_count() {
    let (app, state) = setup_app();
    let repeat = joao();
    seed_team(&state, date(2024, 11, 1), vec![repeat.clone(), antonio()]).await;
    seed_team(&state, date(2024, 12, 1), vec![repeat.clone()]).await;

    let (status, body) = get(
        &app,
        "/integrante-mais-usado?dataInicial=2024-01-01&dataFinal=2025-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "João");
    assert_eq!(body["id"], json!(repeat.id));
}

#[tokio::test]
async fn most_common_team_returns_winning_line_up() {
    let (app, state) = setup_app();
    let a = joao();
    let b = antonio();
    seed_team(&state, date(2024, 11, 1), vec![a.clone(), b.clone()]).await;
    seed_team(&state, date(2024, 11, 8), vec![b, a]).await;
    seed_team(&state, date(2024, 11, 15), vec![jonas()]).await;

    let (status, body) = get(
        &app,
        "/time-mais-comum?dataInicial=2024-01-01&dataFinal=2025-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["João", "Antonio"]));
}

#[tokio::test]
async fn most_common_role_and_franchise() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 11, 1), vec![joao(), antonio()]).await;
    seed_team(&state, date(2025, 2, 20), vec![jonas()]).await;

    let (status, body) = get(
        &app,
        "/funcao-mais-comum?dataInicial=2024-11-01&dataFinal=2025-02-20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["funcao"], "Atacante");

    let (status, body) = get(
        &app,
        "/franquia-mais-famosa?dataInicial=2024-11-01&dataFinal=2025-02-20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("FranquiaA"));
}

#[tokio::test]
async fn count_endpoints_return_full_mappings() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 11, 1), vec![joao(), antonio()]).await;
    seed_team(&state, date(2025, 2, 20), vec![jonas()]).await;

    let (status, body) = get(
        &app,
        "/contagem-por-franquia?dataInicial=2024-11-01&dataFinal=2025-02-20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"FranquiaA": 2, "FranquiaB": 1}));

    let (status, body) = get(
        &app,
        "/contagem-por-funcao?dataInicial=2024-11-01&dataFinal=2025-02-20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Atacante": 2, "Defensor": 1}));
}

#[tokio::test]
async fn range_query_without_any_teams_returns_404() {
    let (app, _) = setup_app();

    let (status, _) = get(
        &app,
        "/contagem-por-funcao?dataInicial=2024-01-01&dataFinal=2024-12-31",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn range_query_with_all_teams_outside_period_returns_404() {
    let (app, state) = setup_app();
    seed_team(&state, date(2020, 1, 1), vec![joao()]).await;

    let (status, _) = get(
        &app,
        "/contagem-por-funcao?dataInicial=2024-01-01&dataFinal=2024-12-31",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn range_query_with_missing_bound_returns_400() {
    let (app, state) = setup_app();
    seed_team(&state, date(2024, 11, 1), vec![joao()]).await;

    let (status, _) = get(&app, "/integrante-mais-usado?dataInicial=2024-01-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

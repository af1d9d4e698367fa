use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        player::{CreatePlayerDto, PlayerDto},
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
        transfer::TeamTransfersDto,
    },
    server::{
        error::AppError,
        model::player::Player,
        service::{player::PlayerService, team::TeamService},
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamNameQuery {
    /// Exact name of the team
    pub name: Option<String>,
}

/// Find a team by its name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Query string carrying the team `name`
///
/// # Returns
/// - `200 OK` - Team with the given name
/// - `400 Bad Request` - `name` was not supplied or the query string is malformed
/// - `404 Not Found` - No team has that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/teams",
    tag = TEAM_TAG,
    params(TeamNameQuery),
    responses(
        (status = 200, description = "Team with the given name", body = TeamDto),
        (status = 400, description = "Missing name parameter", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_team_by_name(
    State(state): State<AppState>,
    query: Result<Query<TeamNameQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let name = query
        .name
        .ok_or_else(|| AppError::MissingParameter("name".to_string()))?;

    let team = TeamService::new(&state.db).get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Get a team by id.
///
/// # Returns
/// - `200 OK` - The team
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No team with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "The team", body = TeamDto),
        (status = 400, description = "Invalid team id", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(path)?;

    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Register a new team.
///
/// Validates that the name is not taken and that the founding date is a valid
/// `dd/MM/yyyy` date. All validation errors are returned together.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Team fields
///
/// # Returns
/// - `201 Created` - Team registered; `Location` points at `/teams/{id}`
/// - `400 Bad Request` - Validation failed or body is not valid JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team registered", body = ResponseDto<TeamDto>,
            headers(("Location" = String, description = "URI of the created team"))),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let team = TeamService::new(&state.db).create(payload).await?;
    let location = format!("/teams/{}", team.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ResponseDto::with_data(team.into_dto())),
    ))
}

/// Partially update a team.
///
/// Only non-empty fields in the payload are applied. A malformed founding date
/// rejects the whole update.
///
/// # Returns
/// - `204 No Content` - Team updated
/// - `400 Bad Request` - Invalid id, malformed date or body
/// - `404 Not Found` - No team with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 204, description = "Team updated"),
        (status = 400, description = "Invalid id or payload", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(path)?;
    let Json(payload) = payload?;

    TeamService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a team.
///
/// Players of the team are kept without a team; its transfers, matches and
/// tournament memberships are removed.
///
/// # Returns
/// - `200 OK` - Team deleted
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - No team with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team deleted"),
        (status = 400, description = "Invalid team id", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(path)?;

    TeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}

/// List the players of a team.
///
/// An id with no team yields an empty list.
#[utoipa::path(
    get,
    path = "/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Players of the team", body = Vec<PlayerDto>),
        (status = 400, description = "Invalid team id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_players(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(path)?;

    let players = TeamService::new(&state.db).get_players(id).await?;
    let players: Vec<PlayerDto> = players.into_iter().map(Player::into_dto).collect();

    Ok((StatusCode::OK, Json(players)))
}

/// Summarize the incoming and outgoing transfers of a team.
///
/// An id with no team yields an empty summary.
#[utoipa::path(
    get,
    path = "/teams/{id}/transfers",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Transfer summary of the team", body = TeamTransfersDto),
        (status = 400, description = "Invalid team id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_transfers(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(path)?;

    let transfers = TeamService::new(&state.db).get_transfers(id).await?;

    Ok((StatusCode::OK, Json(transfers.into_dto())))
}

/// Register a new player in a team.
///
/// Validates CPF uniqueness, CPF checksum, birth date format and team existence,
/// returning every failure together.
///
/// # Returns
/// - `201 Created` - Player registered; `Location` points at `/teams/{id}/players/{playerId}`
/// - `400 Bad Request` - Invalid id, validation failed or body is not valid JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player registered", body = ResponseDto<PlayerDto>,
            headers(("Location" = String, description = "URI of the created player"))),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team_player(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreatePlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let team_id = parse_path_id(path)?;
    let Json(payload) = payload?;

    let player = PlayerService::new(&state.db).create(team_id, payload).await?;
    let location = format!("/teams/{}/players/{}", team_id, player.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ResponseDto::with_data(player.into_dto())),
    ))
}

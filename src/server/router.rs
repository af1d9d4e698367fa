use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        player::{CreatePlayerDto, PlayerDto},
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
        transfer::{TeamTransfersDto, TransferDto},
    },
    server::{
        controller::team::{
            self, add_team_player, create_team, delete_team, find_team_by_name, get_team_by_id,
            get_team_players, get_team_transfers, update_team, TEAM_TAG,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Team Registry API", description = "Teams, players and transfers"),
    paths(
        team::find_team_by_name,
        team::get_team_by_id,
        team::create_team,
        team::update_team,
        team::delete_team,
        team::get_team_players,
        team::get_team_transfers,
        team::add_team_player,
    ),
    components(schemas(
        ErrorDto,
        ResponseDto<TeamDto>,
        ResponseDto<PlayerDto>,
        TeamDto,
        CreateTeamDto,
        UpdateTeamDto,
        PlayerDto,
        CreatePlayerDto,
        TransferDto,
        TeamTransfersDto,
    )),
    tags((name = TEAM_TAG, description = "Team registry endpoints")),
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(find_team_by_name).post(create_team))
        .route(
            "/teams/{id}",
            get(get_team_by_id).patch(update_team).delete(delete_team),
        )
        .route(
            "/teams/{id}/players",
            get(get_team_players).post(add_team_player),
        )
        .route("/teams/{id}/transfers", get(get_team_transfers))
        .route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

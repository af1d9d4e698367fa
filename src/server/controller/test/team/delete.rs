use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a team with dependents.
///
/// Verifies that the team is gone, its players remain without a team and its transfers
/// no longer appear for the counterparty.
///
/// Expected: 200 with empty body
#[tokio::test]
async fn deletes_team_and_detaches_players() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();
    let rival = factory::create_team(db).await.unwrap();
    let player = factory::create_player(db, team.id).await.unwrap();
    factory::create_transfer(db, team.id, rival.id).await.unwrap();
    factory::create_game(db, team.id, rival.id, None).await.unwrap();

    let response = delete(db, &format!("/teams/{}", team.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_null());

    let lookup = get(db, &format!("/teams/{}", team.id)).await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);

    let players = get(db, &format!("/teams/{}/players", team.id)).await;
    assert_eq!(players.body, json!([]));

    let rival_transfers = get(db, &format!("/teams/{}/transfers", rival.id)).await;
    assert_eq!(rival_transfers.body["incoming"], json!([]));

    let detached = entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detached.team_id, None);
}

/// Tests deleting a team that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn returns_404_for_unknown_team() {
    let test = setup().await;
    let db = &test.db;

    let response = delete(db, "/teams/12345").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

/// Tests deleting with a non-numeric id.
///
/// Expected: 400
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = setup().await;
    let db = &test.db;

    let response = delete(db, "/teams/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

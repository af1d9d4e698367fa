use super::*;

/// Tests listing the players of a team.
///
/// Expected: 200 with the team's players only
#[tokio::test]
async fn lists_players_of_team() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();
    let other = factory::create_team(db).await.unwrap();
    let player = factory::player::PlayerFactory::new(db)
        .name("Rivellino")
        .cpf("52998224725")
        .birth_date(chrono::NaiveDate::from_ymd_opt(1946, 1, 1).unwrap())
        .team_id(Some(team.id))
        .build()
        .await
        .unwrap();
    factory::create_player(db, other.id).await.unwrap();

    let response = get(db, &format!("/teams/{}/players", team.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{
            "id": player.id,
            "name": "Rivellino",
            "cpf": "52998224725",
            "birthDate": "01/01/1946",
            "teamId": team.id
        }])
    );
}

/// Tests listing players for an id with no team.
///
/// Expected: 200 with an empty list
#[tokio::test]
async fn returns_empty_list_for_unknown_team() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams/321/players").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

/// Tests listing players with a non-numeric id.
///
/// Expected: 400
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams/one/players").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

use super::*;

/// Tests registering a valid player in a team.
///
/// Expected: 201 with Location `/teams/{id}/players/{playerId}` and the player body
#[tokio::test]
async fn adds_player_to_team() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();

    let response = send_json(
        db,
        Method::POST,
        &format!("/teams/{}/players", team.id),
        json!({ "name": "Tostão", "cpf": "52998224725", "birthDate": "25/01/1947" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);

    let player_id = response.body["data"]["id"].as_i64().unwrap();
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap(),
        format!("/teams/{}/players/{}", team.id, player_id).as_str()
    );
    assert_eq!(response.body["data"]["teamId"], team.id);
    assert_eq!(response.body["data"]["birthDate"], "25/01/1947");
    assert_eq!(response.body["errors"], json!([]));

    let players = get(db, &format!("/teams/{}/players", team.id)).await;
    assert_eq!(players.body.as_array().unwrap().len(), 1);
}

/// Tests registering a player with a taken CPF in a team that does not exist.
///
/// Expected: 400 listing both errors
#[tokio::test]
async fn reports_taken_cpf_and_missing_team() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();
    factory::player::PlayerFactory::new(db)
        .cpf("52998224725")
        .team_id(Some(team.id))
        .build()
        .await
        .unwrap();

    let response = send_json(
        db,
        Method::POST,
        "/teams/9999/players",
        json!({ "name": "Copy", "cpf": "52998224725", "birthDate": "01/01/2000" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["data"].is_null());
    assert_eq!(errors(&response.body), vec![CPF_TAKEN, TEAM_NOT_EXISTS]);
}

/// Tests registering a player with an invalid CPF and birth date.
///
/// Expected: 400 listing both errors in validation order
#[tokio::test]
async fn reports_invalid_cpf_and_birth_date() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();

    let response = send_json(
        db,
        Method::POST,
        &format!("/teams/{}/players", team.id),
        json!({ "name": "Bad", "cpf": "11111111111", "birthDate": "abc" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors(&response.body),
        vec![INVALID_CPF, INVALID_BIRTH_DATE]
    );

    let players = get(db, &format!("/teams/{}/players", team.id)).await;
    assert_eq!(players.body, json!([]));
}

/// Tests registering a player with a non-numeric team id.
///
/// Expected: 400
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = setup().await;
    let db = &test.db;

    let response = send_json(
        db,
        Method::POST,
        "/teams/abc/players",
        json!({ "name": "Any", "cpf": "52998224725", "birthDate": "01/01/2000" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

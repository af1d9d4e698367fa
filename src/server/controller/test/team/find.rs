use super::*;

/// Tests looking a team up by name.
///
/// Expected: 200 with camelCase fields and a dd/MM/yyyy founding date
#[tokio::test]
async fn finds_team_by_name() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::team::TeamFactory::new(db)
        .name("Santos")
        .uf("SP")
        .city("Santos")
        .founding_date(chrono::NaiveDate::from_ymd_opt(1912, 4, 14).unwrap())
        .build()
        .await
        .unwrap();

    let response = get(db, "/teams?name=Santos").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "id": team.id,
            "name": "Santos",
            "uf": "SP",
            "city": "Santos",
            "foundingDate": "14/04/1912"
        })
    );
}

/// Tests the name lookup without a name parameter.
///
/// Expected: 400 with the error envelope
#[tokio::test]
async fn rejects_missing_name() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["data"].is_null());
    assert_eq!(errors(&response.body).len(), 1);
}

/// Tests the name lookup with a query string that does not deserialize.
///
/// Repeating `name` fails query extraction; the failure must still use the error envelope.
///
/// Expected: 400 with the error envelope
#[tokio::test]
async fn rejects_malformed_query_with_envelope() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams?name=a&name=b").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["data"].is_null());
    assert_eq!(errors(&response.body).len(), 1);
}

/// Tests the name lookup for a name nobody has.
///
/// Expected: 404
#[tokio::test]
async fn returns_404_for_unknown_name() {
    let test = setup().await;
    let db = &test.db;

    factory::create_team(db).await.unwrap();

    let response = get(db, "/teams?name=Nobody").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body["data"].is_null());
}

/// Tests getting a team by id.
///
/// Expected: 200 with the team
#[tokio::test]
async fn gets_team_by_id() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();

    let response = get(db, &format!("/teams/{}", team.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], team.id);
    assert_eq!(response.body["name"], team.name.as_str());
    assert_eq!(response.body["foundingDate"], "02/01/1921");
}

/// Tests getting a team with an id that is not an integer.
///
/// Expected: 400 with the error envelope
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["data"].is_null());
    assert_eq!(errors(&response.body).len(), 1);
}

/// Tests getting a team that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn returns_404_for_unknown_id() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

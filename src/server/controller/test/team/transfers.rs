use super::*;

/// Tests the transfer summary of a team.
///
/// Expected: 200 with incoming/outgoing lists and their totals
#[tokio::test]
async fn summarizes_transfers() {
    let test = setup().await;
    let db = &test.db;

    let team = factory::create_team(db).await.unwrap();
    let rival = factory::create_team(db).await.unwrap();

    factory::transfer::TransferFactory::new(db, rival.id, team.id)
        .value(700)
        .build()
        .await
        .unwrap();
    factory::transfer::TransferFactory::new(db, rival.id, team.id)
        .value(300)
        .build()
        .await
        .unwrap();
    let sale = factory::transfer::TransferFactory::new(db, team.id, rival.id)
        .transfer_date(chrono::NaiveDate::from_ymd_opt(2024, 8, 30).unwrap())
        .value(250)
        .build()
        .await
        .unwrap();

    let response = get(db, &format!("/teams/{}/transfers", team.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["teamId"], team.id);
    assert_eq!(response.body["incoming"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["totalSpent"], 1000);
    assert_eq!(response.body["totalReceived"], 250);

    let outgoing = &response.body["outgoing"][0];
    assert_eq!(outgoing["id"], sale.id);
    assert_eq!(outgoing["originTeamId"], team.id);
    assert_eq!(outgoing["destinyTeamId"], rival.id);
    assert_eq!(outgoing["transferDate"], "30/08/2024");
}

/// Tests the transfer summary for an id with no team.
///
/// Expected: 200 with empty lists and zero totals
#[tokio::test]
async fn returns_empty_summary_for_unknown_team() {
    let test = setup().await;
    let db = &test.db;

    let response = get(db, "/teams/88/transfers").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["incoming"], json!([]));
    assert_eq!(response.body["outgoing"], json!([]));
    assert_eq!(response.body["totalSpent"], 0);
    assert_eq!(response.body["totalReceived"], 0);
}

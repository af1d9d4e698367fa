use super::*;

/// Tests listing transfers whose destiny is the team.
///
/// Verifies that outgoing transfers and transfers between other teams are excluded
/// and that results are ordered by transfer date.
///
/// Expected: Ok with incoming transfers, oldest first
#[tokio::test]
async fn returns_incoming_transfers_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;
    let seller = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;

    let later = factory::transfer::TransferFactory::new(db, seller.id, team.id)
        .transfer_date(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap())
        .value(300)
        .build()
        .await?;
    let earlier = factory::transfer::TransferFactory::new(db, other.id, team.id)
        .transfer_date(NaiveDate::from_ymd_opt(2021, 1, 15).unwrap())
        .value(200)
        .build()
        .await?;
    factory::create_transfer(db, team.id, seller.id).await?;
    factory::create_transfer(db, seller.id, other.id).await?;

    let incoming = TransferRepository::new(db).get_incoming(team.id).await?;

    assert_eq!(incoming.len(), 2);
    assert_eq!(incoming[0].id, earlier.id);
    assert_eq!(incoming[1].id, later.id);
    assert!(incoming.iter().all(|t| t.destiny_team_id == team.id));

    Ok(())
}

/// Tests a team that never bought a player.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_incoming() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;
    let buyer = factory::create_team(db).await?;
    factory::create_transfer(db, team.id, buyer.id).await?;

    let incoming = TransferRepository::new(db).get_incoming(team.id).await?;

    assert!(incoming.is_empty());

    Ok(())
}

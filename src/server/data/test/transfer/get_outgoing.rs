use super::*;

/// Tests listing transfers whose origin is the team.
///
/// Expected: Ok with outgoing transfers only
#[tokio::test]
async fn returns_outgoing_transfers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;
    let buyer = factory::create_team(db).await?;
    let player = factory::create_player(db, buyer.id).await?;

    let sale = factory::transfer::TransferFactory::new(db, team.id, buyer.id)
        .player_id(Some(player.id))
        .transfer_date(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
        .value(4_500_000)
        .build()
        .await?;
    factory::create_transfer(db, buyer.id, team.id).await?;

    let outgoing = TransferRepository::new(db).get_outgoing(team.id).await?;

    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].id, sale.id);
    assert_eq!(outgoing[0].player_id, Some(player.id));
    assert_eq!(outgoing[0].value, 4_500_000);
    assert_eq!(outgoing[0].origin_team_id, team.id);

    Ok(())
}

/// Tests listing outgoing transfers for an id with no team.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let outgoing = TransferRepository::new(db).get_outgoing(31).await?;

    assert!(outgoing.is_empty());

    Ok(())
}

use super::*;

/// Tests finding a player by CPF.
///
/// Expected: Ok(Some) with the matching player
#[tokio::test]
async fn finds_player_by_cpf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;
    let player = factory::player::PlayerFactory::new(db)
        .cpf("52998224725")
        .team_id(Some(team.id))
        .build()
        .await?;
    factory::create_player(db, team.id).await?;

    let found = PlayerRepository::new(db)
        .find_by_cpf("52998224725")
        .await?
        .unwrap();

    assert_eq!(found.id, player.id);
    assert_eq!(found.team_id, Some(team.id));

    Ok(())
}

/// Tests CPF lookups finding players whose team was deleted.
///
/// Expected: Ok(Some) with a null team id
#[tokio::test]
async fn finds_player_without_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let player = factory::player::PlayerFactory::new(db).build().await?;

    let found = PlayerRepository::new(db)
        .find_by_cpf(&player.cpf)
        .await?
        .unwrap();

    assert_eq!(found.team_id, None);

    Ok(())
}

/// Tests looking up an unregistered CPF.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_cpf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let found = PlayerRepository::new(db).find_by_cpf("52998224725").await?;

    assert!(found.is_none());

    Ok(())
}

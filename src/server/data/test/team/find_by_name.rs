use super::*;

/// Tests finding a team by its exact name.
///
/// Expected: Ok(Some) with the matching team
#[tokio::test]
async fn finds_team_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_team(db).await?;
    let team = factory::team::TeamFactory::new(db)
        .name("Fortaleza")
        .build()
        .await?;

    let found = TeamRepository::new(db).find_by_name("Fortaleza").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, team.id);

    Ok(())
}

/// Tests that name lookups do not match partially.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_partial_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    factory::team::TeamFactory::new(db)
        .name("Fortaleza")
        .build()
        .await?;

    let found = TeamRepository::new(db).find_by_name("Forta").await?;

    assert!(found.is_none());

    Ok(())
}

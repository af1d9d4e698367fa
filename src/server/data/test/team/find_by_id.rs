use super::*;

/// Tests finding an existing team by id.
///
/// Expected: Ok(Some) with all fields converted from the entity
#[tokio::test]
async fn finds_team_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;

    let found = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();

    assert_eq!(found.id, team.id);
    assert_eq!(found.name, team.name);
    assert_eq!(found.uf, team.uf);
    assert_eq!(found.city, team.city);
    assert_eq!(found.founding_date, team.founding_date);

    Ok(())
}

/// Tests looking up an id that was never inserted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let found = TeamRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests updating only the place fields of a team.
///
/// Verifies that fields left as `None` keep their stored values.
///
/// Expected: Ok with uf and city changed, name and founding date unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;

    let updated = TeamRepository::new(db)
        .update(UpdateTeamParams {
            id: team.id,
            uf: Some("PE".to_string()),
            city: Some("Recife".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, team.name);
    assert_eq!(updated.founding_date, team.founding_date);
    assert_eq!(updated.uf, "PE");
    assert_eq!(updated.city, "Recife");

    let stored = entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.city, "Recife");

    Ok(())
}

/// Tests updating every field at once.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let team = factory::create_team(db).await?;
    let date = NaiveDate::from_ymd_opt(1909, 10, 17).unwrap();

    let updated = TeamRepository::new(db)
        .update(UpdateTeamParams {
            id: team.id,
            name: Some("Coritiba".to_string()),
            uf: Some("PR".to_string()),
            city: Some("Curitiba".to_string()),
            founding_date: Some(date),
        })
        .await?;

    assert_eq!(updated.id, team.id);
    assert_eq!(updated.name, "Coritiba");
    assert_eq!(updated.uf, "PR");
    assert_eq!(updated.city, "Curitiba");
    assert_eq!(updated.founding_date, date);

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = &test.db;

    let result = TeamRepository::new(db)
        .update(UpdateTeamParams {
            id: 42,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

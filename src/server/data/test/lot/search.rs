use super::*;
use crate::server::model::search::SearchTerm;
use test_utils::factory::parking_lot::LotFactory;

/// Tests searching lots by name and location.
///
/// Expected: Ok with lots whose name or location contains the term in any case,
/// ordered by ID
#[tokio::test]
async fn matches_name_or_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let central = LotFactory::new(db)
        .name("Central Plaza")
        .location(Some("Market Road".to_string()))
        .build()
        .await?
        .0;
    let harbor = LotFactory::new(db)
        .name("Harbor")
        .location(Some("Central Pier".to_string()))
        .build()
        .await?
        .0;
    LotFactory::new(db)
        .name("Airport")
        .location(None)
        .build()
        .await?;

    let term = SearchTerm::parse("CENTRAL").unwrap();
    let found = LotRepository::new(db).search(&term).await?;

    let ids: Vec<i32> = found.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![central.id, harbor.id]);

    Ok(())
}

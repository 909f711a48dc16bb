use catalog_core::types::CreateGenre;

use test_helpers::{create_test_genre, TestDb};

#[tokio::test]
async fn test_create_and_get_genre() {
    let db = TestDb::new().await;

    // Create a genre
    let genre = catalog_storage::genres::create(
        db.pool(),
        CreateGenre {
            name: "Fantasy".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(genre.name, "Fantasy");

    // Get by ID
    let fetched = catalog_storage::genres::get_by_id(db.pool(), genre.id)
        .await
        .unwrap();
    assert!(fetched.is_some());
    assert_eq!(fetched.unwrap().name, "Fantasy");
}

#[tokio::test]
async fn test_get_by_id_missing() {
    let db = TestDb::new().await;

    let fetched = catalog_storage::genres::get_by_id(db.pool(), 9999)
        .await
        .unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_find_genre_by_name() {
    let db = TestDb::new().await;

    create_test_genre(db.pool(), "Horror").await;

    // Find by exact name
    let found = catalog_storage::genres::find_by_name(db.pool(), "Horror")
        .await
        .unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Horror");

    // Not found
    let not_found = catalog_storage::genres::find_by_name(db.pool(), "Jazz")
        .await
        .unwrap();
    assert!(not_found.is_none());
}

#[tokio::test]
async fn test_get_all_ordered_by_name() {
    let db = TestDb::new().await;

    // Insert out of order
    create_test_genre(db.pool(), "Sci-Fi").await;
    create_test_genre(db.pool(), "Fantasy").await;
    create_test_genre(db.pool(), "Poetry").await;

    let genres = catalog_storage::genres::get_all(db.pool()).await.unwrap();
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();

    assert_eq!(names, vec!["Fantasy", "Poetry", "Sci-Fi"]);
}

#[tokio::test]
async fn test_duplicate_name_rejected_by_constraint() {
    let db = TestDb::new().await;

    create_test_genre(db.pool(), "Fantasy").await;

    // Second insert with the same name hits the unique index
    let result = catalog_storage::genres::create(
        db.pool(),
        CreateGenre {
            name: "Fantasy".to_string(),
        },
    )
    .await;

    let err = result.expect_err("duplicate insert should fail");
    assert!(err.is_unique_violation());

    let count = catalog_storage::genres::count(db.pool()).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_count() {
    let db = TestDb::new().await;

    assert_eq!(catalog_storage::genres::count(db.pool()).await.unwrap(), 0);

    create_test_genre(db.pool(), "Fantasy").await;
    create_test_genre(db.pool(), "Sci-Fi").await;

    assert_eq!(catalog_storage::genres::count(db.pool()).await.unwrap(), 2);
}

use test_helpers::{create_test_book, create_test_genre, TestDb};

#[tokio::test]
async fn test_get_books_by_genre() {
    let db = TestDb::new().await;

    let fantasy = create_test_genre(db.pool(), "Fantasy").await;
    let scifi = create_test_genre(db.pool(), "Sci-Fi").await;

    create_test_book(db.pool(), "The Hobbit", fantasy.id).await;
    create_test_book(db.pool(), "A Wizard of Earthsea", fantasy.id).await;
    create_test_book(db.pool(), "Dune", scifi.id).await;

    let fantasy_books = catalog_storage::books::get_by_genre(db.pool(), fantasy.id)
        .await
        .unwrap();

    // Only books in the requested genre, ordered by title
    let titles: Vec<&str> = fantasy_books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A Wizard of Earthsea", "The Hobbit"]);
}

#[tokio::test]
async fn test_get_by_genre_empty() {
    let db = TestDb::new().await;

    let genre = create_test_genre(db.pool(), "Poetry").await;

    let books = catalog_storage::books::get_by_genre(db.pool(), genre.id)
        .await
        .unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_create_and_count_books() {
    let db = TestDb::new().await;

    let genre = create_test_genre(db.pool(), "Fantasy").await;
    let book = create_test_book(db.pool(), "The Hobbit", genre.id).await;

    assert_eq!(book.title, "The Hobbit");
    assert_eq!(book.genre_id, genre.id);
    assert!(book.summary.is_some());

    assert_eq!(catalog_storage::books::count(db.pool()).await.unwrap(), 1);
}

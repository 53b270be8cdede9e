use sqlx::PgPool;
use std::sync::Arc;
use shortener_core::domain::entities::NewLink;
use shortener_core::domain::repositories::{LinkRepository, StoreError};
use shortener_core::infrastructure::persistence::PgLinkRepository;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_put_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .put(NewLink::new("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.code, "test123");
    assert_eq!(link.original_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.put(NewLink::new("abc123", "https://example.com"))
        .await
        .unwrap();

    let link = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(link.unwrap().original_url, "https://example.com");

    assert!(repo.find_by_code("nothere").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_url(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.put(NewLink::new("abc123", "https://example.com/a"))
        .await
        .unwrap();

    let link = repo.find_by_url("https://example.com/a").await.unwrap();
    assert_eq!(link.unwrap().code, "abc123");

    assert!(
        repo.find_by_url("https://example.com/b")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_put_duplicate_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.put(NewLink::new("dup123", "https://example.com/a"))
        .await
        .unwrap();

    let result = repo.put(NewLink::new("dup123", "https://example.com/b")).await;
    assert!(matches!(result, Err(StoreError::AlreadyExists)));

    let link = repo.find_by_code("dup123").await.unwrap().unwrap();
    assert_eq!(link.original_url, "https://example.com/a");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_put_duplicate_url(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.put(NewLink::new("first1", "https://example.com/a"))
        .await
        .unwrap();

    let result = repo.put(NewLink::new("second", "https://example.com/a")).await;
    assert!(matches!(result, Err(StoreError::AlreadyExists)));
    assert!(repo.find_by_code("second").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    assert!(repo.health_check().await);
    assert_eq!(repo.backend_name(), "postgres");
}

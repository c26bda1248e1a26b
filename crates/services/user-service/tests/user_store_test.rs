//! UserStore tests against an in-memory SQLite database.
//!
//! The schema comes from the real migrations, so the unique email index is
//! the one enforcing conflicts here.

use std::sync::Arc;

use sea_orm::ConnectOptions;

use common::AppError;
use domain::User;
use user_service_lib::infra::Database;
use user_service_lib::{UserRepository, UserStore};

const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$aGFzaA";

async fn create_store() -> UserStore {
    // One connection: every pooled SQLite memory connection is its own database
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect_with_options(options)
        .await
        .expect("sqlite should connect and migrate");
    UserStore::new(db.get_connection())
}

#[tokio::test]
async fn test_insert_then_find() {
    let store = create_store().await;
    let user = User::new("ann@example.com", HASH, "Ann").unwrap();

    store.insert(&user).await.unwrap();

    let by_email = store.find_by_email("ann@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id(), user.id());
    assert_eq!(by_email.password_hash(), HASH);
    assert_eq!(by_email.name(), "Ann");

    let by_id = store.find_by_id(user.id()).await.unwrap().unwrap();
    assert_eq!(by_id.email(), "ann@example.com");
}

#[tokio::test]
async fn test_lookups_return_none_when_absent() {
    let store = create_store().await;

    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    assert!(store.find_by_id(uuid::Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let store = create_store().await;
    let first = User::new("ann@example.com", HASH, "Ann").unwrap();
    let second = User::new("ann@example.com", HASH, "Bob").unwrap();

    store.insert(&first).await.unwrap();
    let err = store.insert(&second).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    let stored = store.find_by_email("ann@example.com").await.unwrap().unwrap();
    assert_eq!(stored.name(), "Ann");
}

#[tokio::test]
async fn test_concurrent_inserts_yield_one_success() {
    let store = Arc::new(create_store().await);
    let first = User::new("race@example.com", HASH, "First").unwrap();
    let second = User::new("race@example.com", HASH, "Second").unwrap();

    let (a, b) = tokio::join!(store.insert(&first), store.insert(&second));

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    let conflicts = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);
}

#[tokio::test]
async fn test_update_changes_name() {
    let store = create_store().await;
    let mut user = User::new("ann@example.com", HASH, "Ann").unwrap();
    store.insert(&user).await.unwrap();

    user.update_profile("Anna");
    tokio_test::assert_ok!(store.update(&user).await);

    let stored = store.find_by_id(user.id()).await.unwrap().unwrap();
    assert_eq!(stored.name(), "Anna");
    assert_eq!(stored.email(), "ann@example.com");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let store = create_store().await;
    let user = User::new("ghost@example.com", HASH, "Ghost").unwrap();

    let err = store.update(&user).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_ping() {
    let store = create_store().await;
    tokio_test::assert_ok!(store.ping().await);
}

#[tokio::test]
async fn test_migration_status_and_rollback() {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect_with_options(options).await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert!(!status.is_empty());
    assert!(status.iter().all(|(_, applied)| *applied));

    db.rollback_migration().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().any(|(name, applied)| name.contains("create_users_table") && !applied));

    db.run_migrations().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
}

//! End-to-end workflow tests over the in-memory store.

use std::sync::Arc;

use futures::future::join_all;

use auth_service_lib::{Argon2Hasher, AuthService, Authenticator, JwtIssuer, PasswordHasher};
use common::{AppError, Deadline, JwtConfig};
use domain::{AuthenticateCommand, RegisterCommand};
use user_service_lib::repository::InMemoryUserStore;
use user_service_lib::UserRepository;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

struct Harness {
    store: Arc<InMemoryUserStore>,
    issuer: Arc<JwtIssuer>,
    auth: Arc<Authenticator>,
}

fn harness() -> Harness {
    let store = Arc::new(InMemoryUserStore::new());
    let config = JwtConfig::new(SECRET, "users-api", "users-clients").unwrap();
    let issuer = Arc::new(JwtIssuer::new(&config));
    // Cheap cost keeps the suite fast; verification reads the cost from the hash
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::with_cost(1024, 1, 1).unwrap());

    let repo: Arc<dyn UserRepository> = store.clone();
    let auth = Arc::new(Authenticator::new(repo, hasher, issuer.clone()).unwrap());

    Harness {
        store,
        issuer,
        auth,
    }
}

#[tokio::test]
async fn test_register_and_login_scenario() {
    let h = harness();
    let deadline = Deadline::none();

    let id = h
        .auth
        .register(RegisterCommand::new("a@b.com", "Secr3t!", "Ann"), &deadline)
        .await
        .unwrap();

    let duplicate = h
        .auth
        .register(RegisterCommand::new("a@b.com", "Other1!", "Bob"), &deadline)
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let token = h
        .auth
        .authenticate(AuthenticateCommand::new("a@b.com", "Secr3t!"), &deadline)
        .await
        .unwrap()
        .expect("correct credentials should yield a token");
    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);

    let claims = h.issuer.verify(&token.access_token).unwrap();
    assert_eq!(claims.sub, id);
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.name, "Ann");
    assert_eq!(claims.exp - claims.iat, 3600);

    let wrong_password = h
        .auth
        .authenticate(AuthenticateCommand::new("a@b.com", "wrong"), &deadline)
        .await
        .unwrap();
    let unknown_email = h
        .auth
        .authenticate(AuthenticateCommand::new("x@y.com", "whatever"), &deadline)
        .await
        .unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_email.is_none());
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_stored_hash_is_salted_and_not_plaintext() {
    let h = harness();
    let deadline = Deadline::none();

    h.auth
        .register(RegisterCommand::new("a@b.com", "Secr3t!", "Ann"), &deadline)
        .await
        .unwrap();
    h.auth
        .register(RegisterCommand::new("c@d.com", "Secr3t!", "Cid"), &deadline)
        .await
        .unwrap();

    let first = h.store.find_by_email("a@b.com").await.unwrap().unwrap();
    let second = h.store.find_by_email("c@d.com").await.unwrap().unwrap();

    assert_ne!(first.password_hash(), "Secr3t!");
    assert_ne!(first.password_hash(), second.password_hash());
}

#[tokio::test]
async fn test_concurrent_registrations_yield_exactly_one_success() {
    let h = harness();

    let attempts = (0..8).map(|i| {
        let auth = h.auth.clone();
        async move {
            auth.register(
                RegisterCommand::new("race@example.com", "Secr3t!", format!("Racer {}", i)),
                &Deadline::none(),
            )
            .await
        }
    });
    let results = join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(h.store.len(), 1);
}

#[tokio::test]
async fn test_invalid_email_rejected_before_insert() {
    let h = harness();

    let result = h
        .auth
        .register(
            RegisterCommand::new("no-at-sign", "Secr3t!", "Ann"),
            &Deadline::none(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn test_verify_token_through_service() {
    let h = harness();
    let deadline = Deadline::none();

    let id = h
        .auth
        .register(RegisterCommand::new("a@b.com", "Secr3t!", "Ann"), &deadline)
        .await
        .unwrap();
    let token = h
        .auth
        .authenticate(AuthenticateCommand::new("a@b.com", "Secr3t!"), &deadline)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(h.auth.verify_token(&token.access_token).unwrap().sub, id);
    tokio_test::assert_err!(h.auth.verify_token("tampered"));
}

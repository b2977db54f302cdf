//! Integration tests for `DieselUserDirectory` against a live PostgreSQL.
//!
//! Set `SESSION_AUTH_TEST_DATABASE_URL` to a disposable database to run them.
//! The suite drops and recreates the `users` table, so it runs as a single
//! sequential scenario and skips when the variable is unset.

use session_auth::domain::ports::{SeedOutcome, UserDirectory};
use session_auth::domain::{UserId, Username};
use session_auth::outbound::persistence::{DbPool, DieselUserDirectory, PoolConfig};

const DATABASE_URL_ENV: &str = "SESSION_AUTH_TEST_DATABASE_URL";

fn username(name: &str) -> Username {
    Username::new(name).expect("valid username")
}

fn names(raw: &[&str]) -> Vec<Username> {
    raw.iter().map(|name| username(name)).collect()
}

#[expect(clippy::print_stderr, reason = "skip notice for local runs")]
async fn directory() -> Option<DieselUserDirectory> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        eprintln!("{DATABASE_URL_ENV} not set; skipping PostgreSQL directory tests");
        return None;
    };
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("database pool");
    Some(DieselUserDirectory::new(pool))
}

#[tokio::test]
async fn diesel_directory_honours_the_directory_contract() {
    let Some(directory) = directory().await else {
        return;
    };
    let seed = names(&["alice", "bob", "charlie"]);

    let users = directory.reset_and_seed(&seed).await.expect("reset");
    let ids: Vec<i32> = users.iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let bob = directory
        .find_by_username(&username("bob"))
        .await
        .expect("lookup")
        .expect("bob exists");
    assert_eq!(bob.id().get(), 2);
    assert!(
        directory
            .find_by_username(&username("Bob"))
            .await
            .expect("lookup")
            .is_none()
    );

    let charlie = directory
        .find_by_id(UserId::new(3).expect("valid id"))
        .await
        .expect("lookup")
        .expect("charlie exists");
    assert_eq!(charlie.username().as_ref(), "charlie");

    let outcome = directory.seed_if_empty(&seed).await.expect("seed");
    assert_eq!(outcome, SeedOutcome::AlreadyPopulated);

    let again = directory.reset_and_seed(&seed).await.expect("second reset");
    let ids: Vec<i32> = again.iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3], "reset restarts id issuance");

    let emptied = directory.reset_and_seed(&[]).await.expect("empty reset");
    assert!(emptied.is_empty());
    let outcome = directory.seed_if_empty(&seed).await.expect("seed");
    assert!(matches!(outcome, SeedOutcome::Seeded(users) if users.len() == 3));
}

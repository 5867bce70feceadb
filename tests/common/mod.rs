//! Shared setup for integration tests: an in-memory SQLite database with
//! every migration applied.

#![allow(dead_code)]

use std::sync::Arc;

use admin_backend::domain::{CreateAdmin, NewAdmin};
use admin_backend::infra::{AdminRepository, AdminStore, Database, Migrator};
use admin_backend::services::AdminManager;
use admin_backend::RecordScope;
use sea_orm::{ConnectOptions, Database as SeaDatabase};
use sea_orm_migration::MigratorTrait;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Fresh, migrated database. A single connection keeps every query on the
/// same in-memory instance.
pub async fn setup_db() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let connection = SeaDatabase::connect(options)
        .await
        .expect("sqlite connection");
    Migrator::up(&connection, None)
        .await
        .expect("migrations apply");

    Database::from_connection(connection)
}

pub fn admin_service(db: &Database, scope: RecordScope) -> AdminManager {
    AdminManager::new(Arc::new(AdminStore::new(db.get_connection())), scope)
}

pub fn new_admin(email: &str, name: &str, surname: &str) -> CreateAdmin {
    CreateAdmin {
        email: Some(email.to_string()),
        password: Some("longenough1".to_string()),
        name: Some(name.to_string()),
        surname: Some(surname.to_string()),
        ..Default::default()
    }
}

/// Insert admins straight through the store, skipping password hashing
pub async fn seed(db: &Database, admins: &[(&str, &str, &str)]) {
    let store = AdminStore::new(db.get_connection());
    for (email, name, surname) in admins {
        store
            .create(NewAdmin {
                email: email.to_string(),
                password_hash: "$argon2id$v=19$seeded".to_string(),
                name: Some(name.to_string()),
                surname: Some(surname.to_string()),
                role: "admin".to_string(),
                enabled: true,
            })
            .await
            .expect("seed admin");
    }
}

/// Soft-remove an admin. Nothing in the API sets `removed`, so tests do it
/// directly.
pub async fn mark_removed(db: &Database, email: &str) {
    use sea_orm::ConnectionTrait;

    db.connection()
        .execute_unprepared(&format!(
            "UPDATE admins SET removed = true WHERE email = '{}'",
            email
        ))
        .await
        .expect("mark removed");
}

/// Drop the `admins` table so every store call fails.
pub async fn break_store(db: &Database) {
    use sea_orm::ConnectionTrait;

    db.connection()
        .execute_unprepared("DROP TABLE admins")
        .await
        .expect("drop admins");
}

//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use maktab_core::auth::{AdminGrant, Session, authenticate, hash_password};
use maktab_shared::config::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseConnection};

/// Tables as the previous deployment created them.
const LEGACY_SCHEMA: [&str; 4] = [
    "CREATE TABLE donation (donor_name VARCHAR NOT NULL, amount FLOAT NOT NULL, \
     date DATE NOT NULL, notes VARCHAR, is_anonymous BOOLEAN NOT NULL, \
     id INTEGER NOT NULL, PRIMARY KEY (id))",
    "CREATE TABLE expense (description VARCHAR NOT NULL, amount FLOAT NOT NULL, \
     date DATE NOT NULL, category VARCHAR NOT NULL, id INTEGER NOT NULL, PRIMARY KEY (id))",
    "CREATE TABLE salary (teacher_name VARCHAR NOT NULL, amount FLOAT NOT NULL, \
     date DATE NOT NULL, id INTEGER NOT NULL, PRIMARY KEY (id))",
    "CREATE TABLE adminuser (id INTEGER NOT NULL, username VARCHAR NOT NULL, \
     password_hash BLOB NOT NULL, PRIMARY KEY (id), UNIQUE (username))",
];

async fn memory_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 5,
        max_lifetime_secs: 3600,
    };

    maktab_db::connect(&config)
        .await
        .expect("Failed to open in-memory database")
}

/// Connects to a fresh in-memory SQLite database with the schema applied.
pub async fn test_db() -> DatabaseConnection {
    let db = memory_db().await;
    maktab_db::migrate(&db).await.expect("Failed to run migrations");
    db
}

/// Connects to a fresh in-memory SQLite database with the legacy tables, empty.
pub async fn legacy_db() -> DatabaseConnection {
    let db = memory_db().await;
    for statement in LEGACY_SCHEMA {
        db.execute_unprepared(statement)
            .await
            .expect("Failed to create legacy table");
    }
    db
}

/// Builds the mutation capability the way a logged-in admin session would.
pub fn admin_grant() -> AdminGrant {
    let hash = hash_password("admin123").expect("Failed to hash password");
    let proof = authenticate("admin", "admin123", &hash).expect("Failed to verify password");

    let mut session = Session::anonymous();
    session.login(proof);
    session.admin_grant().expect("Session should be admin")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

//! Helpers for building throwaway databases and Rocket instances in tests.

use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;
use rocket::figment::{
    Figment,
    util::map,
    value::{Map, Value},
};
use rocket::{Build, Rocket, fairing::AdHoc};
use rocket_sync_db_pools::diesel;

use super::db::{DbConn, run_migrations_fairing, run_pending_migrations, schema_bootstrap_fairing};
use crate::config::DB_POOL_NAME;

/// Configures SQLite with performance-optimized settings for testing.
///
/// Sets `synchronous = OFF`. The rollback journal is left on.
///
/// # Panics
/// Panics if the PRAGMA commands fail to execute
fn set_sqlite_test_pragmas(conn: &mut diesel::SqliteConnection) {
    conn.batch_execute(
        r#"
        PRAGMA synchronous = OFF;
        "#,
    )
    .expect("Failed to set SQLite PRAGMAs");
}

fn set_sqlite_test_pragmas_fairing() -> AdHoc {
    AdHoc::on_ignite("Set SQLite Test Pragmas", |rocket| async {
        let conn = DbConn::get_one(&rocket)
            .await
            .expect("database connection for test pragmas");
        conn.run(|c| {
            set_sqlite_test_pragmas(c);
        })
        .await;
        rocket
    })
}

/// Creates and configures a Rocket instance for testing with an in-memory SQLite database.
///
/// The returned Rocket instance will have:
/// - A unique, shared in-memory SQLite database configured
/// - Database connection pool attached
/// - Testing pragmas set
/// - All migrations run
/// - All resource routes and catchers mounted
pub fn test_rocket() -> Rocket<Build> {
    build_test_rocket(None)
}

/// Like [`test_rocket`], but also runs the schema bootstrap with the given
/// file before migrations.
pub fn test_rocket_with_schema_file(path: &Path) -> Rocket<Build> {
    build_test_rocket(Some(path))
}

fn build_test_rocket(schema_file: Option<&Path>) -> Rocket<Build> {
    use uuid::Uuid;

    // Generate a unique database name for this test instance
    let unique_db_name = format!("file:test_db_{}?mode=memory&cache=shared", Uuid::new_v4());

    let db_config: Map<_, Value> = map! {
        "url" => unique_db_name.into(),
        "pool_size" => 5.into(),
        "timeout" => 5.into(),
    };

    // Defaults only: Rocket.toml and ROCKET_* are not read here
    let mut figment = Figment::from(rocket::Config::default())
        .merge(("databases", map![DB_POOL_NAME => db_config]));
    if let Some(path) = schema_file {
        figment = figment.merge(("clima.schema_file", path.to_string_lossy().to_string()));
    }

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(set_sqlite_test_pragmas_fairing())
        .attach(schema_bootstrap_fairing())
        .attach(run_migrations_fairing());
    crate::register_catchers(crate::mount_api_routes(rocket))
}

/// Creates a synchronous in-memory SQLite database connection for unit tests.
///
/// Runs all embedded migrations. Each call returns a new, independent
/// database.
pub fn setup_test_db() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    run_pending_migrations(&mut conn).expect("Failed to run pending migrations");
    conn
}

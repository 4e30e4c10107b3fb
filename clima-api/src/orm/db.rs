use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use rocket::fairing::AdHoc;
use rocket_sync_db_pools::{database, diesel};

use crate::config::ClimaConfig;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("clima_db")]
pub struct DbConn(diesel::SqliteConnection);

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = BigInt)]
    last_insert_rowid: i64,
}

/// Returns the rowid assigned by the most recent INSERT on this connection.
pub(crate) fn last_insert_rowid(
    conn: &mut SqliteConnection,
) -> Result<i32, diesel::result::Error> {
    let row = diesel::sql_query("SELECT last_insert_rowid() as last_insert_rowid")
        .get_result::<LastInsertRowId>(conn)?;
    i32::try_from(row.last_insert_rowid)
        .map_err(|e| diesel::result::Error::DeserializationError(Box::new(e)))
}

/// Errors raised while preparing the database schema at startup.
#[derive(Debug)]
pub enum SchemaError {
    /// The configured schema file could not be read.
    Read(std::io::Error),
    /// A statement in the schema file failed; the transaction was rolled back.
    Execute(diesel::result::Error),
    /// An embedded migration failed.
    Migration(String),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::Read(e) => write!(f, "could not read schema file: {}", e),
            SchemaError::Execute(e) => write!(f, "schema statements failed: {}", e),
            SchemaError::Migration(e) => write!(f, "migration failed: {}", e),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Executes every statement of a schema file inside a single transaction.
///
/// Either all statements are applied or none are.
pub fn apply_schema_file(
    conn: &mut diesel::SqliteConnection,
    path: &Path,
) -> Result<(), SchemaError> {
    let statements = std::fs::read_to_string(path).map_err(SchemaError::Read)?;
    conn.transaction(|c| c.batch_execute(&statements))
        .map_err(SchemaError::Execute)
}

/// Runs all pending database migrations on the provided connection.
///
/// The migrations create the resource tables only when they are missing, so
/// they are safe to run after a schema file has created them.
pub fn run_pending_migrations(conn: &mut diesel::SqliteConnection) -> Result<(), SchemaError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| SchemaError::Migration(e.to_string()))
}

/// Creates a Rocket fairing that executes the configured schema file on
/// ignition.
///
/// The file path comes from `clima.schema_file`. Without one the fairing
/// does nothing. Any failure aborts launch.
pub fn schema_bootstrap_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Schema Bootstrap", |rocket| async {
        let config = match ClimaConfig::from_figment(rocket.figment()) {
            Ok(config) => config,
            Err(e) => {
                error!("[schema-bootstrap] Invalid clima configuration: {}", e);
                return Err(rocket);
            }
        };

        let Some(path) = config.schema_file else {
            info!("[schema-bootstrap] No schema file configured");
            return Ok(rocket);
        };

        let Some(conn) = DbConn::get_one(&rocket).await else {
            error!("[schema-bootstrap] Could not get DB connection");
            return Err(rocket);
        };

        let display = path.display().to_string();
        match conn.run(move |c| apply_schema_file(c, &path)).await {
            Ok(()) => {
                info!("[schema-bootstrap] Executed schema file {}", display);
                Ok(rocket)
            }
            Err(e) => {
                error!("[schema-bootstrap] {} ({}); refusing to start", e, display);
                Err(rocket)
            }
        }
    })
}

/// Creates a Rocket fairing that runs database migrations on ignition.
///
/// This fairing ensures every resource table exists before the first request
/// is served. A failed migration aborts launch.
pub fn run_migrations_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Diesel Migrations", |rocket| async {
        let Some(conn) = DbConn::get_one(&rocket).await else {
            error!("[migrations] Could not get DB connection");
            return Err(rocket);
        };

        match conn.run(|c| run_pending_migrations(c)).await {
            Ok(()) => Ok(rocket),
            Err(e) => {
                error!("[migrations] {}", e);
                Err(rocket)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::orm::testing::setup_test_db;

    fn table_count(conn: &mut SqliteConnection, name: &str) -> i64 {
        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = BigInt)]
            n: i64,
        }
        diesel::sql_query("SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind::<diesel::sql_types::Text, _>(name)
            .get_result::<Count>(conn)
            .unwrap()
            .n
    }

    #[test]
    fn test_migrations_create_all_tables() {
        let mut conn = setup_test_db();
        for table in [
            "salas", "equipamento", "comandos", "agenda", "logs", "permissoes", "usuario",
            "relacao", "protocolo",
        ] {
            assert_eq!(table_count(&mut conn, table), 1, "missing table {}", table);
        }
    }

    #[test]
    fn test_migrations_after_schema_file() {
        use diesel::Connection;

        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        let model = Path::new(env!("CARGO_MANIFEST_DIR")).join("model.sql");
        apply_schema_file(&mut conn, &model).expect("model.sql should apply");
        run_pending_migrations(&mut conn).expect("migrations should tolerate existing tables");
        assert_eq!(table_count(&mut conn, "relacao"), 1);
    }

    #[test]
    fn test_failed_schema_file_rolls_back() {
        use diesel::Connection;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CREATE TABLE extra_table (id INTEGER PRIMARY KEY);").unwrap();
        writeln!(file, "CREATE TABLE broken (;").unwrap();

        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        let result = apply_schema_file(&mut conn, file.path());
        assert!(matches!(result, Err(SchemaError::Execute(_))));
        assert_eq!(table_count(&mut conn, "extra_table"), 0);
    }

    #[test]
    fn test_last_insert_rowid_out_of_range() {
        let mut conn = setup_test_db();
        diesel::sql_query(
            "INSERT INTO salas (id, descricao, andar, bloco, ip) VALUES (3000000000, 'a', 'b', 'c', 'd')",
        )
        .execute(&mut conn)
        .unwrap();
        assert!(matches!(
            last_insert_rowid(&mut conn),
            Err(diesel::result::Error::DeserializationError(_))
        ));
    }

    #[test]
    fn test_last_insert_rowid_after_insert() {
        let mut conn = setup_test_db();
        diesel::sql_query("INSERT INTO salas (descricao, andar, bloco, ip) VALUES ('a', 'b', 'c', 'd')")
            .execute(&mut conn)
            .unwrap();
        assert_eq!(last_insert_rowid(&mut conn).unwrap(), 1);
    }

    #[test]
    fn test_missing_schema_file() {
        use diesel::Connection;

        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        let result = apply_schema_file(&mut conn, Path::new("/nonexistent/model.sql"));
        assert!(matches!(result, Err(SchemaError::Read(_))));
    }
}

//! API endpoints for the equipment action log (`/logs`).
//!
//! Log rows are written only through this resource. Updates are partial.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{LogEntry, LogEntryChanges, NewLogEntry};
use crate::orm::DbConn;
use crate::orm::log_entry::{
    delete_log_entry, get_all_log_entries, get_log_entry_by_id, insert_log_entry,
    update_log_entry,
};

const NOT_FOUND: &str = "Log não encontrado";

/// List Logs endpoint.
///
/// - **URL:** `/logs`
/// - **Method:** `GET`
#[get("/logs")]
pub async fn list_log_entries(db: DbConn) -> Result<Json<Vec<LogEntry>>, ApiError> {
    db.run(|conn| {
        get_all_log_entries(conn)
            .map(Json)
            .map_err(|e| internal_error("listing logs", e))
    })
    .await
}

/// Get Log endpoint.
///
/// - **URL:** `/logs/<log_id>`
/// - **Method:** `GET`
#[get("/logs/<log_id>")]
pub async fn get_log_entry(db: DbConn, log_id: i32) -> Result<Json<LogEntry>, ApiError> {
    db.run(move |conn| match get_log_entry_by_id(conn, log_id) {
        Ok(Some(entry)) => Ok(Json(entry)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting log", e)),
    })
    .await
}

/// Create Log endpoint.
///
/// - **URL:** `/logs`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {
///   "datas": "2024-03-18",
///   "hora": "08:05:00",
///   "equipamento": "Split 12000 BTU",
///   "id_equipamento": 2,
///   "usuario": "Ana",
///   "sala": "Lab 1",
///   "acao": "ligar"
/// }
/// ```
#[post("/logs", data = "<new_entry>")]
pub async fn create_log_entry(db: DbConn, new_entry: LoggedJson<NewLogEntry>) -> CreatedResult {
    db.run(move |conn| {
        insert_log_entry(conn, &new_entry)
            .map(|entry| created("/logs", entry.id, "Log criado com sucesso!"))
            .map_err(|e| internal_error("creating log", e))
    })
    .await
}

/// Update Log endpoint.
///
/// - **URL:** `/logs/<log_id>`
/// - **Method:** `PUT`
#[put("/logs/<log_id>", data = "<changes>")]
pub async fn update_log_entry_endpoint(
    db: DbConn,
    log_id: i32,
    changes: LoggedJson<LogEntryChanges>,
) -> MessageResult {
    db.run(move |conn| match update_log_entry(conn, log_id, &changes) {
        Ok(Some(_)) => Ok(message("Log atualizado com sucesso!")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating log", e)),
    })
    .await
}

/// Delete Log endpoint.
///
/// - **URL:** `/logs/<log_id>`
/// - **Method:** `DELETE`
#[delete("/logs/<log_id>")]
pub async fn delete_log_entry_endpoint(db: DbConn, log_id: i32) -> MessageResult {
    db.run(move |conn| match delete_log_entry(conn, log_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Log excluído com sucesso!")),
        Err(e) => Err(internal_error("deleting log", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_log_entries,
        get_log_entry,
        create_log_entry,
        update_log_entry_endpoint,
        delete_log_entry_endpoint
    ]
}

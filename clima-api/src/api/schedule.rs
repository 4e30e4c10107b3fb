//! API endpoints for the room schedule (`/agenda`).
//!
//! Each entry books a room for one subject on one day. Dates travel as
//! `YYYY-MM-DD` and times as `HH:MM:SS` in both directions; a value in any
//! other shape is a `400`. Updates replace the whole entry.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{NewSchedule, Schedule};
use crate::orm::DbConn;
use crate::orm::schedule::{
    delete_schedule, get_all_schedules, get_schedule_by_id, insert_schedule, replace_schedule,
};

const NOT_FOUND: &str = "Item da agenda não encontrado";

/// List Schedule endpoint.
///
/// - **URL:** `/agenda`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves every schedule entry, ordered by id
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// [
///   {
///     "id": 1,
///     "disciplina": "Física I",
///     "datas": "2024-03-18",
///     "hora_inicio": "08:00:00",
///     "hora_fim": "09:40:00",
///     "id_sala": 1
///   }
/// ]
/// ```
#[get("/agenda")]
pub async fn list_schedules(db: DbConn) -> Result<Json<Vec<Schedule>>, ApiError> {
    db.run(|conn| {
        get_all_schedules(conn)
            .map(Json)
            .map_err(|e| internal_error("listing schedule", e))
    })
    .await
}

/// Get Schedule Entry endpoint.
///
/// - **URL:** `/agenda/<schedule_id>`
/// - **Method:** `GET`
#[get("/agenda/<schedule_id>")]
pub async fn get_schedule(db: DbConn, schedule_id: i32) -> Result<Json<Schedule>, ApiError> {
    db.run(move |conn| match get_schedule_by_id(conn, schedule_id) {
        Ok(Some(entry)) => Ok(Json(entry)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting schedule entry", e)),
    })
    .await
}

/// Create Schedule Entry endpoint.
///
/// - **URL:** `/agenda`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {
///   "disciplina": "Física I",
///   "datas": "2024-03-18",
///   "hora_inicio": "08:00:00",
///   "hora_fim": "09:40:00",
///   "id_sala": 1
/// }
/// ```
///
/// The room id is stored as given; it is not checked against `/salas`.
#[post("/agenda", data = "<new_schedule>")]
pub async fn create_schedule(db: DbConn, new_schedule: LoggedJson<NewSchedule>) -> CreatedResult {
    db.run(move |conn| {
        insert_schedule(conn, &new_schedule)
            .map(|entry| created("/agenda", entry.id, "Item da agenda criado com sucesso"))
            .map_err(|e| internal_error("creating schedule entry", e))
    })
    .await
}

/// Update Schedule Entry endpoint.
///
/// - **URL:** `/agenda/<schedule_id>`
/// - **Method:** `PUT`
///
/// Requires every field shown for [`create_schedule`].
#[put("/agenda/<schedule_id>", data = "<schedule>")]
pub async fn update_schedule_endpoint(
    db: DbConn,
    schedule_id: i32,
    schedule: LoggedJson<NewSchedule>,
) -> MessageResult {
    db.run(move |conn| match replace_schedule(conn, schedule_id, &schedule) {
        Ok(Some(_)) => Ok(message("Item da agenda atualizado com sucesso")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating schedule entry", e)),
    })
    .await
}

/// Delete Schedule Entry endpoint.
///
/// - **URL:** `/agenda/<schedule_id>`
/// - **Method:** `DELETE`
#[delete("/agenda/<schedule_id>")]
pub async fn delete_schedule_endpoint(db: DbConn, schedule_id: i32) -> MessageResult {
    db.run(move |conn| match delete_schedule(conn, schedule_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Item da agenda excluído com sucesso")),
        Err(e) => Err(internal_error("deleting schedule entry", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_schedules,
        get_schedule,
        create_schedule,
        update_schedule_endpoint,
        delete_schedule_endpoint
    ]
}

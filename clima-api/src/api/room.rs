//! API endpoints for room management (`/salas`).
//!
//! Rooms take partial updates: a `PUT` body may carry any subset of the
//! room fields, and the fields it leaves out keep their stored values.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{NewRoom, Room, RoomChanges};
use crate::orm::DbConn;
use crate::orm::room::{delete_room, get_all_rooms, get_room_by_id, insert_room, update_room};

const NOT_FOUND: &str = "Sala não encontrada";

/// List Rooms endpoint.
///
/// - **URL:** `/salas`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves every room, ordered by id
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// [
///   {"id": 1, "descricao": "Lab 1", "andar": "2", "bloco": "A", "ip": "10.0.0.5"}
/// ]
/// ```
#[get("/salas")]
pub async fn list_rooms(db: DbConn) -> Result<Json<Vec<Room>>, ApiError> {
    db.run(|conn| {
        get_all_rooms(conn)
            .map(Json)
            .map_err(|e| internal_error("listing rooms", e))
    })
    .await
}

/// Get Room endpoint.
///
/// - **URL:** `/salas/<room_id>`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves a specific room by ID
///
/// Answers `404 Not Found` with `{"error": "Sala não encontrada"}` when the
/// room does not exist.
#[get("/salas/<room_id>")]
pub async fn get_room(db: DbConn, room_id: i32) -> Result<Json<Room>, ApiError> {
    db.run(move |conn| match get_room_by_id(conn, room_id) {
        Ok(Some(room)) => Ok(Json(room)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting room", e)),
    })
    .await
}

/// Create Room endpoint.
///
/// - **URL:** `/salas`
/// - **Method:** `POST`
/// - **Purpose:** Creates a new room
///
/// # Request Format
///
/// Every field is required and no other key is accepted.
///
/// ```json
/// {
///   "descricao": "Lab 1",
///   "andar": "2",
///   "bloco": "A",
///   "ip": "10.0.0.5"
/// }
/// ```
///
/// # Response
///
/// **Success (HTTP 201 Created):**
/// ```json
/// {"message": "Sala criada com sucesso!", "id": 1}
/// ```
///
/// **Failure (HTTP 400 Bad Request):** a key is missing, unknown, or has the
/// wrong type.
#[post("/salas", data = "<new_room>")]
pub async fn create_room(db: DbConn, new_room: LoggedJson<NewRoom>) -> CreatedResult {
    db.run(move |conn| {
        insert_room(conn, &new_room)
            .map(|room| created("/salas", room.id, "Sala criada com sucesso!"))
            .map_err(|e| internal_error("creating room", e))
    })
    .await
}

/// Update Room endpoint.
///
/// - **URL:** `/salas/<room_id>`
/// - **Method:** `PUT`
/// - **Purpose:** Overwrites the given fields of a room
///
/// # Request Format
///
/// Any subset of the room fields. An empty object changes nothing.
///
/// ```json
/// {"ip": "10.0.0.99"}
/// ```
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {"message": "Sala atualizada com sucesso!"}
/// ```
#[put("/salas/<room_id>", data = "<changes>")]
pub async fn update_room_endpoint(
    db: DbConn,
    room_id: i32,
    changes: LoggedJson<RoomChanges>,
) -> MessageResult {
    db.run(move |conn| match update_room(conn, room_id, &changes) {
        Ok(Some(_)) => Ok(message("Sala atualizada com sucesso!")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating room", e)),
    })
    .await
}

/// Delete Room endpoint.
///
/// - **URL:** `/salas/<room_id>`
/// - **Method:** `DELETE`
/// - **Purpose:** Deletes a room
///
/// Schedules and relations that point at the room are kept. Deleting the
/// same id twice answers `404` the second time.
#[delete("/salas/<room_id>")]
pub async fn delete_room_endpoint(db: DbConn, room_id: i32) -> MessageResult {
    db.run(move |conn| match delete_room(conn, room_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Sala excluída com sucesso!")),
        Err(e) => Err(internal_error("deleting room", e)),
    })
    .await
}

/// Returns a vector of all routes defined in this module.
pub fn routes() -> Vec<Route> {
    routes![
        list_rooms,
        get_room,
        create_room,
        update_room_endpoint,
        delete_room_endpoint
    ]
}

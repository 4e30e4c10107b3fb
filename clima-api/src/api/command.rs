//! API endpoints for equipment commands (`/comandos`).
//!
//! Commands are always written whole: `PUT` requires the same fields as
//! `POST`, and a body missing any of them is rejected with `400`.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{Command, NewCommand};
use crate::orm::DbConn;
use crate::orm::command::{
    delete_command, get_all_commands, get_command_by_id, insert_command, replace_command,
};

const NOT_FOUND: &str = "Comando não encontrado";

/// List Commands endpoint.
///
/// - **URL:** `/comandos`
/// - **Method:** `GET`
#[get("/comandos")]
pub async fn list_commands(db: DbConn) -> Result<Json<Vec<Command>>, ApiError> {
    db.run(|conn| {
        get_all_commands(conn)
            .map(Json)
            .map_err(|e| internal_error("listing commands", e))
    })
    .await
}

/// Get Command endpoint.
///
/// - **URL:** `/comandos/<command_id>`
/// - **Method:** `GET`
#[get("/comandos/<command_id>")]
pub async fn get_command(db: DbConn, command_id: i32) -> Result<Json<Command>, ApiError> {
    db.run(move |conn| match get_command_by_id(conn, command_id) {
        Ok(Some(command)) => Ok(Json(command)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting command", e)),
    })
    .await
}

/// Create Command endpoint.
///
/// - **URL:** `/comandos`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {"comando": "PWR_ON", "descricao": "Liga o aparelho", "id_protocolo": 3}
/// ```
#[post("/comandos", data = "<new_command>")]
pub async fn create_command(db: DbConn, new_command: LoggedJson<NewCommand>) -> CreatedResult {
    db.run(move |conn| {
        insert_command(conn, &new_command)
            .map(|command| created("/comandos", command.id, "Comando criado com sucesso"))
            .map_err(|e| internal_error("creating command", e))
    })
    .await
}

/// Update Command endpoint.
///
/// - **URL:** `/comandos/<command_id>`
/// - **Method:** `PUT`
///
/// Takes the full field set shown for [`create_command`].
#[put("/comandos/<command_id>", data = "<command>")]
pub async fn update_command_endpoint(
    db: DbConn,
    command_id: i32,
    command: LoggedJson<NewCommand>,
) -> MessageResult {
    db.run(move |conn| match replace_command(conn, command_id, &command) {
        Ok(Some(_)) => Ok(message("Comando atualizado com sucesso")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating command", e)),
    })
    .await
}

/// Delete Command endpoint.
///
/// - **URL:** `/comandos/<command_id>`
/// - **Method:** `DELETE`
#[delete("/comandos/<command_id>")]
pub async fn delete_command_endpoint(db: DbConn, command_id: i32) -> MessageResult {
    db.run(move |conn| match delete_command(conn, command_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Comando excluído com sucesso")),
        Err(e) => Err(internal_error("deleting command", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_commands,
        get_command,
        create_command,
        update_command_endpoint,
        delete_command_endpoint
    ]
}

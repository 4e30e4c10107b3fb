//! API endpoints for equipment protocols (`/protocolo`).

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{NewProtocol, Protocol};
use crate::orm::DbConn;
use crate::orm::protocol::{
    delete_protocol, get_all_protocols, get_protocol_by_id, insert_protocol, replace_protocol,
};

const NOT_FOUND: &str = "Protocolo não encontrado";

/// List Protocols endpoint.
///
/// - **URL:** `/protocolo`
/// - **Method:** `GET`
#[get("/protocolo")]
pub async fn list_protocols(db: DbConn) -> Result<Json<Vec<Protocol>>, ApiError> {
    db.run(|conn| {
        get_all_protocols(conn)
            .map(Json)
            .map_err(|e| internal_error("listing protocols", e))
    })
    .await
}

/// Get Protocol endpoint.
///
/// - **URL:** `/protocolo/<protocol_id>`
/// - **Method:** `GET`
#[get("/protocolo/<protocol_id>")]
pub async fn get_protocol(db: DbConn, protocol_id: i32) -> Result<Json<Protocol>, ApiError> {
    db.run(move |conn| match get_protocol_by_id(conn, protocol_id) {
        Ok(Some(protocol)) => Ok(Json(protocol)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting protocol", e)),
    })
    .await
}

/// Create Protocol endpoint.
///
/// - **URL:** `/protocolo`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {"descricao": "Infravermelho", "id_comando": 1}
/// ```
#[post("/protocolo", data = "<new_protocol>")]
pub async fn create_protocol(db: DbConn, new_protocol: LoggedJson<NewProtocol>) -> CreatedResult {
    db.run(move |conn| {
        insert_protocol(conn, &new_protocol)
            .map(|protocol| created("/protocolo", protocol.id, "Protocolo criado com sucesso"))
            .map_err(|e| internal_error("creating protocol", e))
    })
    .await
}

/// Update Protocol endpoint.
///
/// - **URL:** `/protocolo/<protocol_id>`
/// - **Method:** `PUT`
#[put("/protocolo/<protocol_id>", data = "<protocol>")]
pub async fn update_protocol_endpoint(
    db: DbConn,
    protocol_id: i32,
    protocol: LoggedJson<NewProtocol>,
) -> MessageResult {
    db.run(move |conn| match replace_protocol(conn, protocol_id, &protocol) {
        Ok(Some(_)) => Ok(message("Protocolo atualizado com sucesso")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating protocol", e)),
    })
    .await
}

/// Delete Protocol endpoint.
///
/// - **URL:** `/protocolo/<protocol_id>`
/// - **Method:** `DELETE`
#[delete("/protocolo/<protocol_id>")]
pub async fn delete_protocol_endpoint(db: DbConn, protocol_id: i32) -> MessageResult {
    db.run(move |conn| match delete_protocol(conn, protocol_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Protocolo excluído com sucesso")),
        Err(e) => Err(internal_error("deleting protocol", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_protocols,
        get_protocol,
        create_protocol,
        update_protocol_endpoint,
        delete_protocol_endpoint
    ]
}

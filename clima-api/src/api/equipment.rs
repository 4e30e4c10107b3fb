//! API endpoints for equipment (`/equipamentos`).
//!
//! Equipment takes partial updates, like rooms.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{Equipment, EquipmentChanges, NewEquipment};
use crate::orm::DbConn;
use crate::orm::equipment::{
    delete_equipment, get_all_equipment, get_equipment_by_id, insert_equipment, update_equipment,
};

const NOT_FOUND: &str = "Equipamento não encontrado";

/// List Equipment endpoint.
///
/// - **URL:** `/equipamentos`
/// - **Method:** `GET`
#[get("/equipamentos")]
pub async fn list_equipment(db: DbConn) -> Result<Json<Vec<Equipment>>, ApiError> {
    db.run(|conn| {
        get_all_equipment(conn)
            .map(Json)
            .map_err(|e| internal_error("listing equipment", e))
    })
    .await
}

/// Get Equipment endpoint.
///
/// - **URL:** `/equipamentos/<equipment_id>`
/// - **Method:** `GET`
#[get("/equipamentos/<equipment_id>")]
pub async fn get_equipment(db: DbConn, equipment_id: i32) -> Result<Json<Equipment>, ApiError> {
    db.run(move |conn| match get_equipment_by_id(conn, equipment_id) {
        Ok(Some(equipment)) => Ok(Json(equipment)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting equipment", e)),
    })
    .await
}

/// Create Equipment endpoint.
///
/// - **URL:** `/equipamentos`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {
///   "modelo": "Split 12000 BTU",
///   "descricao": "Ar-condicionado do laboratório",
///   "marca": "Acme",
///   "id_protocolo": 1
/// }
/// ```
#[post("/equipamentos", data = "<new_equipment>")]
pub async fn create_equipment(
    db: DbConn,
    new_equipment: LoggedJson<NewEquipment>,
) -> CreatedResult {
    db.run(move |conn| {
        insert_equipment(conn, &new_equipment)
            .map(|equipment| {
                created("/equipamentos", equipment.id, "Equipamento criado com sucesso!")
            })
            .map_err(|e| internal_error("creating equipment", e))
    })
    .await
}

/// Update Equipment endpoint.
///
/// - **URL:** `/equipamentos/<equipment_id>`
/// - **Method:** `PUT`
///
/// Any subset of the equipment fields; absent fields are left unchanged.
#[put("/equipamentos/<equipment_id>", data = "<changes>")]
pub async fn update_equipment_endpoint(
    db: DbConn,
    equipment_id: i32,
    changes: LoggedJson<EquipmentChanges>,
) -> MessageResult {
    db.run(move |conn| match update_equipment(conn, equipment_id, &changes) {
        Ok(Some(_)) => Ok(message("Equipamento atualizado com sucesso!")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating equipment", e)),
    })
    .await
}

/// Delete Equipment endpoint.
///
/// - **URL:** `/equipamentos/<equipment_id>`
/// - **Method:** `DELETE`
#[delete("/equipamentos/<equipment_id>")]
pub async fn delete_equipment_endpoint(db: DbConn, equipment_id: i32) -> MessageResult {
    db.run(move |conn| match delete_equipment(conn, equipment_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Equipamento excluído com sucesso!")),
        Err(e) => Err(internal_error("deleting equipment", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_equipment,
        get_equipment,
        create_equipment,
        update_equipment_endpoint,
        delete_equipment_endpoint
    ]
}

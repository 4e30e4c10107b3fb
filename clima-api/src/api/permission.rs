//! API endpoints for permission levels (`/permissoes`).
//!
//! Permissions are stored and served only; no route checks them.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{NewPermission, Permission, PermissionChanges};
use crate::orm::DbConn;
use crate::orm::permission::{
    delete_permission, get_all_permissions, get_permission_by_id, insert_permission,
    update_permission,
};

const NOT_FOUND: &str = "Permissão não encontrada";

#[get("/permissoes")]
pub async fn list_permissions(db: DbConn) -> Result<Json<Vec<Permission>>, ApiError> {
    db.run(|conn| {
        get_all_permissions(conn)
            .map(Json)
            .map_err(|e| internal_error("listing permissions", e))
    })
    .await
}

#[get("/permissoes/<permission_id>")]
pub async fn get_permission(db: DbConn, permission_id: i32) -> Result<Json<Permission>, ApiError> {
    db.run(move |conn| match get_permission_by_id(conn, permission_id) {
        Ok(Some(permission)) => Ok(Json(permission)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting permission", e)),
    })
    .await
}

/// Create Permission endpoint.
///
/// - **URL:** `/permissoes`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {"descricao": "Professor", "acesso": "total"}
/// ```
#[post("/permissoes", data = "<new_permission>")]
pub async fn create_permission(
    db: DbConn,
    new_permission: LoggedJson<NewPermission>,
) -> CreatedResult {
    db.run(move |conn| {
        insert_permission(conn, &new_permission)
            .map(|permission| {
                created("/permissoes", permission.id, "Permissão criada com sucesso!")
            })
            .map_err(|e| internal_error("creating permission", e))
    })
    .await
}

#[put("/permissoes/<permission_id>", data = "<changes>")]
pub async fn update_permission_endpoint(
    db: DbConn,
    permission_id: i32,
    changes: LoggedJson<PermissionChanges>,
) -> MessageResult {
    db.run(move |conn| match update_permission(conn, permission_id, &changes) {
        Ok(Some(_)) => Ok(message("Permissão atualizada com sucesso!")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating permission", e)),
    })
    .await
}

#[delete("/permissoes/<permission_id>")]
pub async fn delete_permission_endpoint(db: DbConn, permission_id: i32) -> MessageResult {
    db.run(move |conn| match delete_permission(conn, permission_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Permissão excluída com sucesso!")),
        Err(e) => Err(internal_error("deleting permission", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_permissions,
        get_permission,
        create_permission,
        update_permission_endpoint,
        delete_permission_endpoint
    ]
}

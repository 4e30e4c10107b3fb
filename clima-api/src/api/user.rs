//! API endpoints for users (`/usuarios`).
//!
//! `senha` is accepted on create and update and stored as an argon2 hash.
//! It never appears in a response body or in the request log.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{User, UserInput};
use crate::orm::DbConn;
use crate::orm::user::{delete_user, get_all_users, get_user_by_id, insert_user, replace_user};

const NOT_FOUND: &str = "Usuário não encontrado";

/// List Users endpoint.
///
/// - **URL:** `/usuarios`
/// - **Method:** `GET`
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// [
///   {
///     "id": 1,
///     "nome": "Ana",
///     "email": "ana@example.com",
///     "permissao": "Professor",
///     "id_permissoes": 1,
///     "id_logs": 0
///   }
/// ]
/// ```
#[get("/usuarios")]
pub async fn list_users(db: DbConn) -> Result<Json<Vec<User>>, ApiError> {
    db.run(|conn| {
        get_all_users(conn)
            .map(Json)
            .map_err(|e| internal_error("listing users", e))
    })
    .await
}

/// Get User endpoint.
///
/// - **URL:** `/usuarios/<user_id>`
/// - **Method:** `GET`
#[get("/usuarios/<user_id>")]
pub async fn get_user(db: DbConn, user_id: i32) -> Result<Json<User>, ApiError> {
    db.run(move |conn| match get_user_by_id(conn, user_id) {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting user", e)),
    })
    .await
}

/// Create User endpoint.
///
/// - **URL:** `/usuarios`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {
///   "nome": "Ana",
///   "email": "ana@example.com",
///   "senha": "segredo",
///   "permissao": "Professor",
///   "id_permissoes": 1,
///   "id_logs": 0
/// }
/// ```
#[post("/usuarios", data = "<new_user>")]
pub async fn create_user(db: DbConn, new_user: LoggedJson<UserInput>) -> CreatedResult {
    db.run(move |conn| {
        insert_user(conn, &new_user)
            .map(|user| created("/usuarios", user.id, "Usuário criado com sucesso"))
            .map_err(|e| internal_error("creating user", e))
    })
    .await
}

/// Update User endpoint.
///
/// - **URL:** `/usuarios/<user_id>`
/// - **Method:** `PUT`
///
/// Takes the same body as [`create_user`]; the password is re-hashed.
#[put("/usuarios/<user_id>", data = "<user>")]
pub async fn update_user_endpoint(
    db: DbConn,
    user_id: i32,
    user: LoggedJson<UserInput>,
) -> MessageResult {
    db.run(move |conn| match replace_user(conn, user_id, &user) {
        Ok(Some(_)) => Ok(message("Usuário atualizado com sucesso")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating user", e)),
    })
    .await
}

/// Delete User endpoint.
///
/// - **URL:** `/usuarios/<user_id>`
/// - **Method:** `DELETE`
#[delete("/usuarios/<user_id>")]
pub async fn delete_user_endpoint(db: DbConn, user_id: i32) -> MessageResult {
    db.run(move |conn| match delete_user(conn, user_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Usuário excluído com sucesso")),
        Err(e) => Err(internal_error("deleting user", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_users,
        get_user,
        create_user,
        update_user_endpoint,
        delete_user_endpoint
    ]
}

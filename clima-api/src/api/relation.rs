//! API endpoints for room/equipment relations (`/relacao`).
//!
//! A relation pairs a room id with an equipment id. Neither id is checked
//! against its table.

use rocket::Route;
use rocket::serde::json::Json;

use crate::api::response::{
    ApiError, CreatedResult, MessageResult, created, internal_error, message, not_found,
};
use crate::logged_json::LoggedJson;
use crate::models::{NewRelation, Relation};
use crate::orm::DbConn;
use crate::orm::relation::{
    delete_relation, get_all_relations, get_relation_by_id, insert_relation, replace_relation,
};

const NOT_FOUND: &str = "Relação não encontrada";

#[get("/relacao")]
pub async fn list_relations(db: DbConn) -> Result<Json<Vec<Relation>>, ApiError> {
    db.run(|conn| {
        get_all_relations(conn)
            .map(Json)
            .map_err(|e| internal_error("listing relations", e))
    })
    .await
}

#[get("/relacao/<relation_id>")]
pub async fn get_relation(db: DbConn, relation_id: i32) -> Result<Json<Relation>, ApiError> {
    db.run(move |conn| match get_relation_by_id(conn, relation_id) {
        Ok(Some(relation)) => Ok(Json(relation)),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("getting relation", e)),
    })
    .await
}

/// Create Relation endpoint.
///
/// - **URL:** `/relacao`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// {"id_sala": 1, "id_equipamento": 2}
/// ```
#[post("/relacao", data = "<new_relation>")]
pub async fn create_relation(db: DbConn, new_relation: LoggedJson<NewRelation>) -> CreatedResult {
    db.run(move |conn| {
        insert_relation(conn, &new_relation)
            .map(|relation| created("/relacao", relation.id, "Relação criada com sucesso"))
            .map_err(|e| internal_error("creating relation", e))
    })
    .await
}

/// Update Relation endpoint. Both ids are required.
#[put("/relacao/<relation_id>", data = "<relation>")]
pub async fn update_relation_endpoint(
    db: DbConn,
    relation_id: i32,
    relation: LoggedJson<NewRelation>,
) -> MessageResult {
    db.run(move |conn| match replace_relation(conn, relation_id, &relation) {
        Ok(Some(_)) => Ok(message("Relação atualizada com sucesso")),
        Ok(None) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal_error("updating relation", e)),
    })
    .await
}

#[delete("/relacao/<relation_id>")]
pub async fn delete_relation_endpoint(db: DbConn, relation_id: i32) -> MessageResult {
    db.run(move |conn| match delete_relation(conn, relation_id) {
        Ok(0) => Err(not_found(NOT_FOUND)),
        Ok(_) => Ok(message("Relação excluída com sucesso")),
        Err(e) => Err(internal_error("deleting relation", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        list_relations,
        get_relation,
        create_relation,
        update_relation_endpoint,
        delete_relation_endpoint
    ]
}

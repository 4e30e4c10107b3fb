#[macro_use]
extern crate rocket;

use dotenvy::dotenv;
use rocket::figment::value::Map;
use rocket::request::Request;
use rocket::serde::json::{Json, Value, json};
use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod logged_json;
pub mod models;
pub mod orm;
pub use orm::DbConn;
pub mod schema;

#[cfg(test)]
pub mod generate_types;

use logged_json::BodyRejection;

#[catch(400)]
fn bad_request(req: &Request) -> Json<Value> {
    let mut body = json!({
        "error": "Bad Request",
        "path": req.uri().path().to_string(),
        "status": 400
    });
    if let BodyRejection(Some(detail)) = req.local_cache(|| BodyRejection(None)) {
        body["detail"] = Value::String(detail.clone());
    }
    Json(body)
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Not Found",
        "path": req.uri().path().to_string(),
        "status": 404
    }))
}

#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Unprocessable Entity",
        "path": req.uri().path().to_string(),
        "status": 422
    }))
}

#[catch(500)]
fn internal_server_error(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Internal Server Error",
        "path": req.uri().path().to_string(),
        "status": 500
    }))
}

#[catch(default)]
fn default_catcher(status: rocket::http::Status, req: &Request) -> Json<Value> {
    Json(json!({
        "error": status.reason().unwrap_or("Unknown Error"),
        "path": req.uri().path().to_string(),
        "status": status.code
    }))
}

pub fn mount_api_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/", api::routes())
}

pub fn register_catchers(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.register(
        "/",
        catchers![
            bad_request,
            not_found,
            unprocessable_entity,
            internal_server_error,
            default_catcher
        ],
    )
}

fn log_rocket_info(rocket: &Rocket<Build>) {
    let figment = rocket.figment();

    if let Ok(address) = figment.extract_inner::<String>("address") {
        info!("Rocket is running at: {}", address);
    }

    if let Ok(port) = figment.extract_inner::<u16>("port") {
        info!("Rocket is listening on port: {}", port);
    }

    match figment.extract_inner::<Map<String, Value>>(&format!("databases.{}", config::DB_POOL_NAME))
    {
        Ok(db_config) => {
            if let Some(Value::String(url)) = db_config.get("url") {
                info!("Database URL: {}", url);
            } else {
                warn!("Database URL not found in configuration; set DATABASE_URL");
            }
        }
        Err(e) => {
            warn!("Failed to extract database configuration: {}", e);
        }
    }
}

/// Builds the server from `.env`, `Rocket.toml` and the environment.
///
/// Tests do not go through here; they use [`orm::testing::test_rocket`],
/// which points at a fresh in-memory database.
pub fn rocket() -> Rocket<Build> {
    dotenv().ok();

    let rocket = rocket::custom(config::figment())
        .attach(DbConn::fairing())
        .attach(orm::schema_bootstrap_fairing())
        .attach(orm::run_migrations_fairing());

    log_rocket_info(&rocket);

    register_catchers(mount_api_routes(rocket))
}

//! HTTP layer: one module per resource, each exposing `routes()`.

use rocket::Route;

pub mod command;
pub mod equipment;
pub mod log_entry;
pub mod permission;
pub mod protocol;
pub mod relation;
pub mod response;
pub mod room;
pub mod schedule;
pub mod status;
pub mod user;

/// Every API route, ready to mount at `/`.
pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(status::routes());
    routes.extend(room::routes());
    routes.extend(equipment::routes());
    routes.extend(command::routes());
    routes.extend(schedule::routes());
    routes.extend(log_entry::routes());
    routes.extend(permission::routes());
    routes.extend(user::routes());
    routes.extend(relation::routes());
    routes.extend(protocol::routes());
    routes
}

//! Response bodies and error helpers shared by every resource module.

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error response structure for API failures.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

/// Confirmation returned by update and delete endpoints.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

/// Confirmation returned by create endpoints, with the id of the new row.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

pub type ApiError = status::Custom<Json<ErrorResponse>>;

pub type CreatedResult = Result<status::Created<Json<CreatedResponse>>, ApiError>;

pub type MessageResult = Result<Json<MessageResponse>, ApiError>;

pub fn not_found(message: &str) -> ApiError {
    status::Custom(
        Status::NotFound,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Logs a persistence failure and hides its details from the client.
///
/// `action` reads as the tail of "error while ...", e.g. `"creating room"`.
pub fn internal_error(action: &str, e: diesel::result::Error) -> ApiError {
    error!("Error {}: {:?}", action, e);
    status::Custom(
        Status::InternalServerError,
        Json(ErrorResponse {
            error: format!("Internal server error while {}", action),
        }),
    )
}

pub fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

/// Builds a `201 Created` whose `Location` is `<collection>/<id>`.
pub fn created(collection: &str, id: i32, text: &str) -> status::Created<Json<CreatedResponse>> {
    status::Created::new(format!("{}/{}", collection, id)).body(Json(CreatedResponse {
        message: text.to_string(),
        id,
    }))
}

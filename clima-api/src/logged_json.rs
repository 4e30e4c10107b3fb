//! Logged JSON request guard that captures and logs request bodies.
//!
//! This module provides a wrapper around Rocket's Json type that logs the
//! parsed JSON data and turns every body that cannot be parsed into the
//! expected type into a `400 Bad Request`. Rocket's own `Json<T>` answers
//! `422` when the JSON is well formed but does not match `T` (a missing or
//! unknown key, a wrong type); here both cases are the client's fault in the
//! same way.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{
    Data, Request,
    data::{self, FromData},
};
use serde_json::Value;

/// Keys whose values never reach the log.
const REDACTED_KEYS: &[&str] = &["senha"];

/// Why the request body was rejected, stored in the request-local cache so
/// the `400` catcher can report it.
#[derive(Debug, Default)]
pub struct BodyRejection(pub Option<String>);

/// A wrapper around Rocket's Json that logs the request data.
///
/// This is a drop-in replacement for Json<T> in endpoints that accept a body.
pub struct LoggedJson<T>(pub T);

impl<T> LoggedJson<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for LoggedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for LoggedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn redact(value: &mut Value) {
    if let Value::Object(map) = value {
        for key in REDACTED_KEYS {
            if let Some(field) = map.get_mut(*key) {
                *field = Value::String("<redacted>".to_string());
            }
        }
    }
}

#[rocket::async_trait]
impl<'r, T: Deserialize<'r> + Serialize> FromData<'r> for LoggedJson<T> {
    type Error = rocket::serde::json::Error<'r>;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        match Json::<T>::from_data(req, data).await {
            data::Outcome::Success(json_data) => {
                match serde_json::to_value(&json_data.0) {
                    Ok(mut value) => {
                        redact(&mut value);
                        info!(
                            "API Request Body: {} {} | Data: {}",
                            req.method().as_str(),
                            req.uri().path(),
                            value
                        );
                    }
                    Err(_) => {
                        info!(
                            "API Request Body: {} {} | Data: <failed to serialize>",
                            req.method().as_str(),
                            req.uri().path()
                        );
                    }
                }
                data::Outcome::Success(LoggedJson(json_data.into_inner()))
            }
            data::Outcome::Error((status, e)) => {
                let detail = e.to_string();
                warn!(
                    "API Request Body rejected: {} {} | {}",
                    req.method().as_str(),
                    req.uri().path(),
                    detail
                );
                req.local_cache(|| BodyRejection(Some(detail)));
                let status = if status == Status::UnprocessableEntity {
                    Status::BadRequest
                } else {
                    status
                };
                data::Outcome::Error((status, e))
            }
            data::Outcome::Forward(f) => data::Outcome::Forward(f),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LoggedJson<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

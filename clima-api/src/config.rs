//! Application settings read from Rocket's figment.
//!
//! Everything lives under the `clima` key so it can sit next to Rocket's own
//! settings in `Rocket.toml`:
//!
//! ```toml
//! [default.clima]
//! schema_file = "model.sql"
//! ```

use std::path::PathBuf;

use rocket::figment::providers::{Env, Format, Toml};
use rocket::figment::{self, Figment};
use serde::Deserialize;

/// Name of the database pool in `databases.<name>`.
pub const DB_POOL_NAME: &str = "clima_db";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClimaConfig {
    /// SQL file executed once at boot, before migrations.
    pub schema_file: Option<PathBuf>,
}

impl ClimaConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        figment.focus("clima").extract()
    }
}

/// Builds the figment used by the server.
///
/// Sources, lowest precedence first: Rocket defaults, `Rocket.toml`,
/// `ROCKET_*` variables, then `DATABASE_URL` and `CLIMA_SCHEMA_FILE`.
pub fn figment() -> Figment {
    let mut figment = Figment::from(rocket::Config::default())
        .merge(Toml::file("Rocket.toml").nested())
        .merge(Env::prefixed("ROCKET_").global());

    if let Ok(url) = std::env::var("DATABASE_URL") {
        figment = figment.merge((format!("databases.{}.url", DB_POOL_NAME), url));
    }
    if let Ok(path) = std::env::var("CLIMA_SCHEMA_FILE") {
        figment = figment.merge(("clima.schema_file", path));
    }
    figment
}

use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::commands;

/// A command string that can be sent to a piece of equipment.
///
/// `protocol_id` holds the id of the equipment the command belongs to; the
/// column name is historical.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = commands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Command {
    pub id: i32,
    #[serde(rename = "comando")]
    pub command_text: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "id_protocolo")]
    pub protocol_id: i32,
}

// Used for both POST and PUT: commands are always written whole.
#[derive(Insertable, AsChangeset, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = commands)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewCommand {
    #[serde(rename = "comando")]
    pub command_text: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "id_protocolo")]
    pub protocol_id: i32,
}

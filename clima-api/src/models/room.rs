use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::rooms;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Room {
    pub id: i32,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "andar")]
    pub floor: String,
    #[serde(rename = "bloco")]
    pub block: String,
    pub ip: String,
}

// Request body for POST /salas; every column is required.
#[derive(Insertable, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = rooms)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewRoom {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "andar")]
    pub floor: String,
    #[serde(rename = "bloco")]
    pub block: String,
    pub ip: String,
}

/// Partial update for a room. Absent fields keep their stored value.
#[derive(AsChangeset, Debug, Default, Deserialize, Serialize, TS)]
#[diesel(table_name = rooms)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct RoomChanges {
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "andar")]
    pub floor: Option<String>,
    #[serde(rename = "bloco")]
    pub block: Option<String>,
    pub ip: Option<String>,
}

impl RoomChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.floor.is_none() && self.block.is_none() && self.ip.is_none()
    }
}

use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::protocols;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = protocols)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Protocol {
    pub id: i32,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "id_comando")]
    pub command_id: i32,
}

#[derive(Insertable, AsChangeset, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = protocols)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewProtocol {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "id_comando")]
    pub command_id: i32,
}

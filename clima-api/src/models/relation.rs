use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::relations;

/// Links a piece of equipment to the room it is installed in.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = relations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Relation {
    pub id: i32,
    #[serde(rename = "id_sala")]
    pub room_id: i32,
    #[serde(rename = "id_equipamento")]
    pub equipment_id: i32,
}

#[derive(Insertable, AsChangeset, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = relations)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewRelation {
    #[serde(rename = "id_sala")]
    pub room_id: i32,
    #[serde(rename = "id_equipamento")]
    pub equipment_id: i32,
}

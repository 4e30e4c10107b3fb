use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::equipment;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = equipment)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Equipment {
    pub id: i32,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "id_protocolo")]
    pub protocol_id: i32,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = equipment)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewEquipment {
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "id_protocolo")]
    pub protocol_id: i32,
}

/// Partial update for an equipment row.
#[derive(AsChangeset, Debug, Default, Deserialize, Serialize, TS)]
#[diesel(table_name = equipment)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct EquipmentChanges {
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "marca")]
    pub brand: Option<String>,
    #[serde(rename = "id_protocolo")]
    pub protocol_id: Option<i32>,
}

impl EquipmentChanges {
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.description.is_none()
            && self.brand.is_none()
            && self.protocol_id.is_none()
    }
}

use chrono::{NaiveDate, NaiveTime};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::log_entries;

/// An action recorded against a piece of equipment.
///
/// Entries are only written through the logs endpoints. The equipment, user
/// and room names are stored as free text next to the equipment id.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = log_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct LogEntry {
    pub id: i32,
    #[serde(rename = "datas")]
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    #[ts(type = "string")]
    pub time: NaiveTime,
    #[serde(rename = "equipamento")]
    pub equipment_name: String,
    #[serde(rename = "id_equipamento")]
    pub equipment_id: i32,
    #[serde(rename = "usuario")]
    pub user_name: String,
    #[serde(rename = "sala")]
    pub room_name: String,
    #[serde(rename = "acao")]
    pub action: String,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = log_entries)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewLogEntry {
    #[serde(rename = "datas")]
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    #[ts(type = "string")]
    pub time: NaiveTime,
    #[serde(rename = "equipamento")]
    pub equipment_name: String,
    #[serde(rename = "id_equipamento")]
    pub equipment_id: i32,
    #[serde(rename = "usuario")]
    pub user_name: String,
    #[serde(rename = "sala")]
    pub room_name: String,
    #[serde(rename = "acao")]
    pub action: String,
}

#[derive(AsChangeset, Debug, Default, Deserialize, Serialize, TS)]
#[diesel(table_name = log_entries)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct LogEntryChanges {
    #[serde(rename = "datas")]
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "hora")]
    #[ts(type = "string | null")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "equipamento")]
    pub equipment_name: Option<String>,
    #[serde(rename = "id_equipamento")]
    pub equipment_id: Option<i32>,
    #[serde(rename = "usuario")]
    pub user_name: Option<String>,
    #[serde(rename = "sala")]
    pub room_name: Option<String>,
    #[serde(rename = "acao")]
    pub action: Option<String>,
}

impl LogEntryChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.equipment_name.is_none()
            && self.equipment_id.is_none()
            && self.user_name.is_none()
            && self.room_name.is_none()
            && self.action.is_none()
    }
}

use chrono::{NaiveDate, NaiveTime};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::schedules;

/// A class booked in a room. Serialized dates look like `2024-03-18` and
/// times like `08:30:00`.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = schedules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Schedule {
    pub id: i32,
    #[serde(rename = "disciplina")]
    pub subject: String,
    #[serde(rename = "datas")]
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    #[ts(type = "string")]
    pub start_time: NaiveTime,
    #[serde(rename = "hora_fim")]
    #[ts(type = "string")]
    pub end_time: NaiveTime,
    #[serde(rename = "id_sala")]
    pub room_id: i32,
}

#[derive(Insertable, AsChangeset, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = schedules)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewSchedule {
    #[serde(rename = "disciplina")]
    pub subject: String,
    #[serde(rename = "datas")]
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    #[ts(type = "string")]
    pub start_time: NaiveTime,
    #[serde(rename = "hora_fim")]
    #[ts(type = "string")]
    pub end_time: NaiveTime,
    #[serde(rename = "id_sala")]
    pub room_id: i32,
}

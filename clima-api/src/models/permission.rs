use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::permissions;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = permissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Permission {
    pub id: i32,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "acesso")]
    pub access_level: String,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize, TS)]
#[diesel(table_name = permissions)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct NewPermission {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "acesso")]
    pub access_level: String,
}

#[derive(AsChangeset, Debug, Default, Deserialize, Serialize, TS)]
#[diesel(table_name = permissions)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct PermissionChanges {
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "acesso")]
    pub access_level: Option<String>,
}

impl PermissionChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.access_level.is_none()
    }
}

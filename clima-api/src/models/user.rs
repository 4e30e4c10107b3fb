use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::users;

/// A user as returned by the API. The password hash is never selected.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct User {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "permissao")]
    pub permission_label: String,
    #[serde(rename = "id_permissoes")]
    pub permission_id: i32,
    #[serde(rename = "id_logs")]
    pub log_id: i32,
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub permission_label: String,
    pub permission_id: i32,
    pub log_id: i32,
}

// For API inputs: POST /usuarios and PUT /usuarios/<id> both take the full set.
#[derive(Deserialize, Serialize, Clone, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct UserInput {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "permissao")]
    pub permission_label: String,
    #[serde(rename = "id_permissoes")]
    pub permission_id: i32,
    #[serde(rename = "id_logs")]
    pub log_id: i32,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("permission_label", &self.permission_label)
            .field("permission_id", &self.permission_id)
            .field("log_id", &self.log_id)
            .finish()
    }
}

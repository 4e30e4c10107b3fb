use diesel::prelude::*;

use crate::models::{NewPermission, Permission, PermissionChanges};
use crate::orm::last_insert_rowid;

/// Returns all permissions in ascending order by id.
pub fn get_all_permissions(
    conn: &mut SqliteConnection,
) -> Result<Vec<Permission>, diesel::result::Error> {
    use crate::schema::permissions::dsl::*;
    permissions.order(id.asc()).select(Permission::as_select()).load(conn)
}

pub fn get_permission_by_id(
    conn: &mut SqliteConnection,
    permission_id: i32,
) -> Result<Option<Permission>, diesel::result::Error> {
    use crate::schema::permissions::dsl::*;
    permissions.find(permission_id).select(Permission::as_select()).first(conn).optional()
}

pub fn insert_permission(
    conn: &mut SqliteConnection,
    new_permission: &NewPermission,
) -> Result<Permission, diesel::result::Error> {
    use crate::schema::permissions::dsl::*;

    diesel::insert_into(permissions).values(new_permission).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    permissions.find(last_id).select(Permission::as_select()).first(conn)
}

/// Writes the fields present in `changes`. `Ok(None)` means no such row.
pub fn update_permission(
    conn: &mut SqliteConnection,
    permission_id: i32,
    changes: &PermissionChanges,
) -> Result<Option<Permission>, diesel::result::Error> {
    use crate::schema::permissions::dsl::*;

    if !changes.is_empty() {
        let updated = diesel::update(permissions.find(permission_id)).set(changes).execute(conn)?;
        if updated == 0 {
            return Ok(None);
        }
    }
    get_permission_by_id(conn, permission_id)
}

pub fn delete_permission(
    conn: &mut SqliteConnection,
    permission_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::permissions::dsl::*;
    diesel::delete(permissions.find(permission_id)).execute(conn)
}

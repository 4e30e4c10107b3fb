use diesel::prelude::*;

use crate::models::{Equipment, EquipmentChanges, NewEquipment};
use crate::orm::last_insert_rowid;

/// Returns all equipment in ascending order by id.
pub fn get_all_equipment(
    conn: &mut SqliteConnection,
) -> Result<Vec<Equipment>, diesel::result::Error> {
    use crate::schema::equipment::dsl::*;
    equipment.order(id.asc()).select(Equipment::as_select()).load(conn)
}

/// Gets a piece of equipment by its ID.
pub fn get_equipment_by_id(
    conn: &mut SqliteConnection,
    equipment_id: i32,
) -> Result<Option<Equipment>, diesel::result::Error> {
    use crate::schema::equipment::dsl::*;
    equipment.find(equipment_id).select(Equipment::as_select()).first(conn).optional()
}

pub fn insert_equipment(
    conn: &mut SqliteConnection,
    new_equipment: &NewEquipment,
) -> Result<Equipment, diesel::result::Error> {
    use crate::schema::equipment::dsl::*;

    diesel::insert_into(equipment).values(new_equipment).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    equipment.find(last_id).select(Equipment::as_select()).first(conn)
}

/// Writes the fields present in `changes`. `Ok(None)` means no such row.
pub fn update_equipment(
    conn: &mut SqliteConnection,
    equipment_id: i32,
    changes: &EquipmentChanges,
) -> Result<Option<Equipment>, diesel::result::Error> {
    use crate::schema::equipment::dsl::*;

    if !changes.is_empty() {
        let updated = diesel::update(equipment.find(equipment_id)).set(changes).execute(conn)?;
        if updated == 0 {
            return Ok(None);
        }
    }
    get_equipment_by_id(conn, equipment_id)
}

/// Deletes a piece of equipment. Commands, logs and relations pointing at it
/// are not touched.
pub fn delete_equipment(
    conn: &mut SqliteConnection,
    equipment_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::equipment::dsl::*;
    diesel::delete(equipment.find(equipment_id)).execute(conn)
}

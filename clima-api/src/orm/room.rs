use diesel::prelude::*;

use crate::models::{NewRoom, Room, RoomChanges};
use crate::orm::last_insert_rowid;

/// Returns all rooms in ascending order by id.
pub fn get_all_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>, diesel::result::Error> {
    use crate::schema::rooms::dsl::*;
    rooms.order(id.asc()).select(Room::as_select()).load(conn)
}

/// Gets a room by its ID.
pub fn get_room_by_id(
    conn: &mut SqliteConnection,
    room_id: i32,
) -> Result<Option<Room>, diesel::result::Error> {
    use crate::schema::rooms::dsl::*;
    rooms.find(room_id).select(Room::as_select()).first(conn).optional()
}

/// Inserts a new room and returns it with its assigned id.
pub fn insert_room(
    conn: &mut SqliteConnection,
    new_room: &NewRoom,
) -> Result<Room, diesel::result::Error> {
    use crate::schema::rooms::dsl::*;

    diesel::insert_into(rooms).values(new_room).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    rooms.find(last_id).select(Room::as_select()).first(conn)
}

/// Writes the fields present in `changes` onto a room.
///
/// Returns `Ok(None)` when no room has this id. An empty change set leaves
/// the row untouched.
pub fn update_room(
    conn: &mut SqliteConnection,
    room_id: i32,
    changes: &RoomChanges,
) -> Result<Option<Room>, diesel::result::Error> {
    use crate::schema::rooms::dsl::*;

    if !changes.is_empty() {
        let updated = diesel::update(rooms.find(room_id)).set(changes).execute(conn)?;
        if updated == 0 {
            return Ok(None);
        }
    }
    get_room_by_id(conn, room_id)
}

/// Deletes a room. Returns the number of rows removed.
///
/// Schedules and relations that reference the room are left as they are.
pub fn delete_room(conn: &mut SqliteConnection, room_id: i32) -> Result<usize, diesel::result::Error> {
    use crate::schema::rooms::dsl::*;
    diesel::delete(rooms.find(room_id)).execute(conn)
}

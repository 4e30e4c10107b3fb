use diesel::prelude::*;

use crate::models::{NewProtocol, Protocol};
use crate::orm::last_insert_rowid;

/// Returns all protocols in ascending order by id.
pub fn get_all_protocols(
    conn: &mut SqliteConnection,
) -> Result<Vec<Protocol>, diesel::result::Error> {
    use crate::schema::protocols::dsl::*;
    protocols.order(id.asc()).select(Protocol::as_select()).load(conn)
}

pub fn get_protocol_by_id(
    conn: &mut SqliteConnection,
    protocol_id: i32,
) -> Result<Option<Protocol>, diesel::result::Error> {
    use crate::schema::protocols::dsl::*;
    protocols.find(protocol_id).select(Protocol::as_select()).first(conn).optional()
}

pub fn insert_protocol(
    conn: &mut SqliteConnection,
    new_protocol: &NewProtocol,
) -> Result<Protocol, diesel::result::Error> {
    use crate::schema::protocols::dsl::*;

    diesel::insert_into(protocols).values(new_protocol).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    protocols.find(last_id).select(Protocol::as_select()).first(conn)
}

pub fn replace_protocol(
    conn: &mut SqliteConnection,
    protocol_id: i32,
    protocol: &NewProtocol,
) -> Result<Option<Protocol>, diesel::result::Error> {
    use crate::schema::protocols::dsl::*;

    let updated = diesel::update(protocols.find(protocol_id)).set(protocol).execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    get_protocol_by_id(conn, protocol_id)
}

pub fn delete_protocol(
    conn: &mut SqliteConnection,
    protocol_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::protocols::dsl::*;
    diesel::delete(protocols.find(protocol_id)).execute(conn)
}

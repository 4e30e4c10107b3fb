use diesel::prelude::*;

use crate::models::{NewRelation, Relation};
use crate::orm::last_insert_rowid;

/// Returns all room/equipment relations in ascending order by id.
pub fn get_all_relations(
    conn: &mut SqliteConnection,
) -> Result<Vec<Relation>, diesel::result::Error> {
    use crate::schema::relations::dsl::*;
    relations.order(id.asc()).select(Relation::as_select()).load(conn)
}

pub fn get_relation_by_id(
    conn: &mut SqliteConnection,
    relation_id: i32,
) -> Result<Option<Relation>, diesel::result::Error> {
    use crate::schema::relations::dsl::*;
    relations.find(relation_id).select(Relation::as_select()).first(conn).optional()
}

/// Links a room and a piece of equipment. Neither id is checked.
pub fn insert_relation(
    conn: &mut SqliteConnection,
    new_relation: &NewRelation,
) -> Result<Relation, diesel::result::Error> {
    use crate::schema::relations::dsl::*;

    diesel::insert_into(relations).values(new_relation).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    relations.find(last_id).select(Relation::as_select()).first(conn)
}

pub fn replace_relation(
    conn: &mut SqliteConnection,
    relation_id: i32,
    relation: &NewRelation,
) -> Result<Option<Relation>, diesel::result::Error> {
    use crate::schema::relations::dsl::*;

    let updated = diesel::update(relations.find(relation_id)).set(relation).execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    get_relation_by_id(conn, relation_id)
}

pub fn delete_relation(
    conn: &mut SqliteConnection,
    relation_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::relations::dsl::*;
    diesel::delete(relations.find(relation_id)).execute(conn)
}

use diesel::prelude::*;

use crate::models::{LogEntry, LogEntryChanges, NewLogEntry};
use crate::orm::last_insert_rowid;

/// Returns all log entries in ascending order by id.
pub fn get_all_log_entries(
    conn: &mut SqliteConnection,
) -> Result<Vec<LogEntry>, diesel::result::Error> {
    use crate::schema::log_entries;
    log_entries::table
        .order(log_entries::id.asc())
        .select(LogEntry::as_select())
        .load(conn)
}

pub fn get_log_entry_by_id(
    conn: &mut SqliteConnection,
    entry_id: i32,
) -> Result<Option<LogEntry>, diesel::result::Error> {
    use crate::schema::log_entries;
    log_entries::table
        .find(entry_id)
        .select(LogEntry::as_select())
        .first(conn)
        .optional()
}

pub fn insert_log_entry(
    conn: &mut SqliteConnection,
    new_entry: &NewLogEntry,
) -> Result<LogEntry, diesel::result::Error> {
    use crate::schema::log_entries;

    diesel::insert_into(log_entries::table).values(new_entry).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    log_entries::table.find(last_id).select(LogEntry::as_select()).first(conn)
}

/// Writes the fields present in `changes`. `Ok(None)` means no such row.
pub fn update_log_entry(
    conn: &mut SqliteConnection,
    entry_id: i32,
    changes: &LogEntryChanges,
) -> Result<Option<LogEntry>, diesel::result::Error> {
    use crate::schema::log_entries;

    if !changes.is_empty() {
        let updated = diesel::update(log_entries::table.find(entry_id))
            .set(changes)
            .execute(conn)?;
        if updated == 0 {
            return Ok(None);
        }
    }
    get_log_entry_by_id(conn, entry_id)
}

pub fn delete_log_entry(
    conn: &mut SqliteConnection,
    entry_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::log_entries;
    diesel::delete(log_entries::table.find(entry_id)).execute(conn)
}

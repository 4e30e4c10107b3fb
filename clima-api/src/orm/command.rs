use diesel::prelude::*;

use crate::models::{Command, NewCommand};
use crate::orm::last_insert_rowid;

/// Returns all commands in ascending order by id.
pub fn get_all_commands(conn: &mut SqliteConnection) -> Result<Vec<Command>, diesel::result::Error> {
    use crate::schema::commands::dsl::*;
    commands.order(id.asc()).select(Command::as_select()).load(conn)
}

/// Gets a command by its ID.
pub fn get_command_by_id(
    conn: &mut SqliteConnection,
    command_id: i32,
) -> Result<Option<Command>, diesel::result::Error> {
    use crate::schema::commands::dsl::*;
    commands.find(command_id).select(Command::as_select()).first(conn).optional()
}

pub fn insert_command(
    conn: &mut SqliteConnection,
    new_command: &NewCommand,
) -> Result<Command, diesel::result::Error> {
    use crate::schema::commands::dsl::*;

    diesel::insert_into(commands).values(new_command).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    commands.find(last_id).select(Command::as_select()).first(conn)
}

/// Overwrites every column of a command. `Ok(None)` means no such row.
pub fn replace_command(
    conn: &mut SqliteConnection,
    command_id: i32,
    command: &NewCommand,
) -> Result<Option<Command>, diesel::result::Error> {
    use crate::schema::commands::dsl::*;

    let updated = diesel::update(commands.find(command_id)).set(command).execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    get_command_by_id(conn, command_id)
}

pub fn delete_command(
    conn: &mut SqliteConnection,
    command_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::commands::dsl::*;
    diesel::delete(commands.find(command_id)).execute(conn)
}

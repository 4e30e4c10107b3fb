use diesel::prelude::*;

use crate::models::{NewSchedule, Schedule};
use crate::orm::last_insert_rowid;

/// Returns all schedule entries in ascending order by id.
pub fn get_all_schedules(
    conn: &mut SqliteConnection,
) -> Result<Vec<Schedule>, diesel::result::Error> {
    use crate::schema::schedules;
    schedules::table
        .order(schedules::id.asc())
        .select(Schedule::as_select())
        .load(conn)
}

pub fn get_schedule_by_id(
    conn: &mut SqliteConnection,
    schedule_id: i32,
) -> Result<Option<Schedule>, diesel::result::Error> {
    use crate::schema::schedules;
    schedules::table
        .find(schedule_id)
        .select(Schedule::as_select())
        .first(conn)
        .optional()
}

pub fn insert_schedule(
    conn: &mut SqliteConnection,
    new_schedule: &NewSchedule,
) -> Result<Schedule, diesel::result::Error> {
    use crate::schema::schedules;

    diesel::insert_into(schedules::table).values(new_schedule).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    schedules::table.find(last_id).select(Schedule::as_select()).first(conn)
}

/// Overwrites every column of a schedule entry. `Ok(None)` means no such row.
pub fn replace_schedule(
    conn: &mut SqliteConnection,
    schedule_id: i32,
    schedule: &NewSchedule,
) -> Result<Option<Schedule>, diesel::result::Error> {
    use crate::schema::schedules;

    let updated = diesel::update(schedules::table.find(schedule_id))
        .set(schedule)
        .execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    get_schedule_by_id(conn, schedule_id)
}

pub fn delete_schedule(
    conn: &mut SqliteConnection,
    schedule_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::schedules;
    diesel::delete(schedules::table.find(schedule_id)).execute(conn)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::orm::testing::setup_test_db;

    fn physics_class() -> NewSchedule {
        NewSchedule {
            subject: "Física I".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 40, 0).unwrap(),
            room_id: 1,
        }
    }

    #[test]
    fn test_insert_schedule_keeps_date_and_times() {
        let mut conn = setup_test_db();
        let created = insert_schedule(&mut conn, &physics_class()).unwrap();

        let fetched = get_schedule_by_id(&mut conn, created.id).unwrap().unwrap();
        assert_eq!(fetched.subject, "Física I");
        assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(fetched.start_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(fetched.end_time, NaiveTime::from_hms_opt(9, 40, 0).unwrap());
    }

    #[test]
    fn test_replace_schedule() {
        let mut conn = setup_test_db();
        let created = insert_schedule(&mut conn, &physics_class()).unwrap();

        let mut moved = physics_class();
        moved.room_id = 5;
        moved.date = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();
        let replaced = replace_schedule(&mut conn, created.id, &moved).unwrap().unwrap();

        assert_eq!(replaced.room_id, 5);
        assert_eq!(replaced.date, NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
        assert_eq!(get_all_schedules(&mut conn).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_schedule() {
        let mut conn = setup_test_db();
        let created = insert_schedule(&mut conn, &physics_class()).unwrap();

        assert_eq!(delete_schedule(&mut conn, created.id).unwrap(), 1);
        assert_eq!(get_schedule_by_id(&mut conn, created.id).unwrap(), None);
    }
}

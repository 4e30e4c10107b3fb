//! Database operations for users.
//!
//! Passwords arrive in clear text on the API and are stored as argon2 hashes.
//! The hash column is never selected into [`User`].

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use diesel::prelude::*;

use crate::models::{NewUser, User, UserInput};
use crate::orm::last_insert_rowid;

/// Hashes a password with Argon2 and a random salt, producing a PHC string.
///
/// # Panics
/// Panics if hashing fails (should not happen with default parameters)
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("Hashing should succeed")
        .to_string()
}

fn to_new_user(input: &UserInput) -> NewUser {
    NewUser {
        name: input.name.clone(),
        email: input.email.clone(),
        password_hash: hash_password(&input.password),
        permission_label: input.permission_label.clone(),
        permission_id: input.permission_id,
        log_id: input.log_id,
    }
}

/// Returns all users in ascending order by id.
pub fn get_all_users(conn: &mut SqliteConnection) -> Result<Vec<User>, diesel::result::Error> {
    use crate::schema::users::dsl::*;
    users.order(id.asc()).select(User::as_select()).load(conn)
}

pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i32,
) -> Result<Option<User>, diesel::result::Error> {
    use crate::schema::users::dsl::*;
    users.find(user_id).select(User::as_select()).first(conn).optional()
}

pub fn insert_user(
    conn: &mut SqliteConnection,
    input: &UserInput,
) -> Result<User, diesel::result::Error> {
    use crate::schema::users::dsl::*;

    diesel::insert_into(users).values(&to_new_user(input)).execute(conn)?;
    let last_id = last_insert_rowid(conn)?;

    users.find(last_id).select(User::as_select()).first(conn)
}

/// Overwrites every column of a user, re-hashing the password.
/// `Ok(None)` means no such row.
pub fn replace_user(
    conn: &mut SqliteConnection,
    user_id: i32,
    input: &UserInput,
) -> Result<Option<User>, diesel::result::Error> {
    use crate::schema::users::dsl::*;

    let updated = diesel::update(users.find(user_id))
        .set(&to_new_user(input))
        .execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    get_user_by_id(conn, user_id)
}

pub fn delete_user(conn: &mut SqliteConnection, user_id: i32) -> Result<usize, diesel::result::Error> {
    use crate::schema::users::dsl::*;
    diesel::delete(users.find(user_id)).execute(conn)
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;
    use crate::orm::testing::setup_test_db;
    use crate::schema::users;

    fn stored_hash(conn: &mut SqliteConnection, user_id: i32) -> String {
        users::table
            .find(user_id)
            .select(users::password_hash)
            .first(conn)
            .unwrap()
    }

    fn verifies(hash: &str, password: &str) -> bool {
        let parsed = PasswordHash::new(hash).expect("valid PHC string");
        Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
    }

    fn maria() -> UserInput {
        UserInput {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            password: "segredo".to_string(),
            permission_label: "admin".to_string(),
            permission_id: 1,
            log_id: 0,
        }
    }

    #[test]
    fn test_insert_user_hashes_password() {
        let mut conn = setup_test_db();
        let user = insert_user(&mut conn, &maria()).unwrap();

        assert_eq!(user.name, "Maria");
        assert_eq!(user.email, "maria@example.com");

        let hash = stored_hash(&mut conn, user.id);
        assert_ne!(hash, "segredo");
        assert!(verifies(&hash, "segredo"));
        assert!(!verifies(&hash, "errado"));
    }

    #[test]
    fn test_replace_user_rehashes_password() {
        let mut conn = setup_test_db();
        let user = insert_user(&mut conn, &maria()).unwrap();

        let mut input = maria();
        input.email = "maria@clima.example".to_string();
        input.password = "nova-senha".to_string();
        let replaced = replace_user(&mut conn, user.id, &input).unwrap().unwrap();

        assert_eq!(replaced.email, "maria@clima.example");
        assert!(verifies(&stored_hash(&mut conn, user.id), "nova-senha"));
    }

    #[test]
    fn test_user_lookup_and_delete() {
        let mut conn = setup_test_db();
        let user = insert_user(&mut conn, &maria()).unwrap();

        assert_eq!(get_all_users(&mut conn).unwrap(), vec![user.clone()]);
        assert_eq!(replace_user(&mut conn, 999, &maria()).unwrap(), None);
        assert_eq!(delete_user(&mut conn, user.id).unwrap(), 1);
        assert_eq!(get_user_by_id(&mut conn, user.id).unwrap(), None);
    }
}

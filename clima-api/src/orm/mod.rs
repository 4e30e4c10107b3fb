pub mod command;
mod db;
pub mod equipment;
pub mod log_entry;
pub mod permission;
pub mod protocol;
pub mod relation;
pub mod room;
pub mod schedule;
#[cfg(any(test, feature = "test-staging"))]
pub mod testing;
pub mod user;

pub use db::*;

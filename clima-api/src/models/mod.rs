pub mod command;
pub mod equipment;
pub mod log_entry;
pub mod permission;
pub mod protocol;
pub mod relation;
pub mod room;
pub mod schedule;
pub mod user;

// Re-export models for easier access
pub use command::*;
pub use equipment::*;
pub use log_entry::*;
pub use permission::*;
pub use protocol::*;
pub use relation::*;
pub use room::*;
pub use schedule::*;
pub use user::*;

//! Domain records persisted by the tracker.
//!
//! These are the shapes written to and read from storage. Field names
//! follow the persisted wire format (camelCase), which predates this
//! crate; the serde renames keep old profile data readable.

pub mod plant;
pub mod user;

pub use plant::Plant;
pub use user::User;

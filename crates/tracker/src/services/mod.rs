//! Domain services.
//!
//! Services glue the repositories together into the operations the
//! presentation layer invokes: registration and login in [`auth`],
//! collection management and the merged-view detail resolver in
//! [`plants`].

pub mod auth;
pub mod plants;

pub use auth::{AuthError, AuthService};
pub use plants::{CollectionError, PlantService};

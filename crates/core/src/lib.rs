//! Verdant Core - Shared types library.
//!
//! This crate provides common types used across all Verdant components:
//! - `tracker` - Storage, catalog, and domain services
//! - `cli` - Command-line surface for browsing and collection management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, plus the
//!   closed-set plant classification enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

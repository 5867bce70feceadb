//! Repository layer - Data access abstraction
//!
//! The admin service only sees the `AdminRepository` trait; `AdminStore`
//! is the SeaORM implementation wired in at startup.

mod admin_repository;
pub(crate) mod entities;

pub use admin_repository::{AdminRepository, AdminStore, RecordScope};

#[cfg(any(test, feature = "test-utils"))]
pub use admin_repository::MockAdminRepository;

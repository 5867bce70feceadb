//! Domain layer - Core business entities and logic
//!
//! The admin entity, its request/response shapes, password hashing and
//! the search allow-list. Nothing here touches the database or HTTP.

pub mod admin;
pub mod password;
pub mod search;

pub use admin::{
    Admin, AdminChanges, AdminRecord, AdminResponse, CreateAdmin, Identity, NewAdmin,
    UpdateAdmin, UpdatePassword,
};
pub use password::Password;
pub use search::{AdminSearch, SearchField, LIKE_ESCAPE};

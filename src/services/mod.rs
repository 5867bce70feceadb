//! Application services layer - Use cases and business logic.
//!
//! Services depend on the `AdminRepository` trait, never on SeaORM
//! directly, so they can be exercised against mocks.

mod admin_service;
pub mod container;
mod identity_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use admin_service::{AdminManager, AdminService};
pub use identity_service::{Claims, IdentityService, TokenAuthenticator, TokenResponse};

//! Admin Backend - CRUD, search and pagination over admin accounts.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Admin entity, payloads, password hashing, search rules
//! - **services**: Admin and identity use cases
//! - **infra**: Database, migrations and the admin repository
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Response envelope and pagination
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Seed an admin and get a token for it
//! cargo run -- admin create --email root@example.com --password longenough1 --enabled
//! cargo run -- token --email root@example.com
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Admin, Identity, Password};
pub use errors::{AppError, AppResult};
pub use infra::{Database, RecordScope};

//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `admin create` - Seed an admin account
//! - `token` - Issue a bearer token

pub mod args;

pub use args::{Cli, Commands};

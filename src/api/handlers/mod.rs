//! HTTP request handlers.

pub mod admin_handler;

pub use admin_handler::admin_routes;

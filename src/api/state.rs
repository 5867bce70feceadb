//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AdminService, IdentityService, ServiceContainer, Services};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<dyn AdminService>,
    pub identity_service: Arc<dyn IdentityService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire services over the given database using the service container.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            admin_service: container.admins(),
            identity_service: container.identity(),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        admin_service: Arc<dyn AdminService>,
        identity_service: Arc<dyn IdentityService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            admin_service,
            identity_service,
            database,
        }
    }
}

//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::admin_handler;
use crate::domain::{AdminRecord, AdminResponse, CreateAdmin, UpdateAdmin, UpdatePassword};
use crate::services::TokenResponse;
use crate::types::PaginationMeta;

/// OpenAPI documentation for the admin backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin Backend",
        version = "0.1.0",
        description = "CRUD, search and pagination over admin accounts"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        admin_handler::list_admins,
        admin_handler::get_profile,
        admin_handler::get_admin,
        admin_handler::create_admin,
        admin_handler::update_admin,
        admin_handler::update_password,
        admin_handler::delete_admin,
        admin_handler::search_admins,
    ),
    components(
        schemas(
            AdminRecord,
            AdminResponse,
            CreateAdmin,
            UpdateAdmin,
            UpdatePassword,
            PaginationMeta,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admins", description = "Admin account management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by `admin-backend token`"))
                        .build(),
                ),
            );
        }
    }
}

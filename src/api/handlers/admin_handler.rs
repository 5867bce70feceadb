//! Admin collection handlers.
//!
//! Every response uses the `{success, result, message}` envelope. List and
//! search failures carry an empty array as `result`, everything else `null`.

use axum::{
    extract::{Extension, Path, Query, State},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{
    MSG_CREATE_OK, MSG_DELETE_OK, MSG_LIST_OK, MSG_PASSWORD_OK, MSG_PROFILE_OK, MSG_READ_OK,
    MSG_SEARCH_OK, MSG_UPDATE_OK,
};
use crate::domain::{AdminRecord, AdminResponse, CreateAdmin, Identity, UpdateAdmin, UpdatePassword};
use crate::errors::{AppResult, CollectionError};
use crate::types::{ApiResponse, PaginationParams};

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to look for, case-insensitive
    pub q: Option<String>,
    /// Comma-separated field names: email, name, surname, role
    pub fields: Option<String>,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admins).post(create_admin))
        .route("/me", get(get_profile))
        .route("/search", get(search_admins))
        .route(
            "/:id",
            get(get_admin).put(update_admin).delete(delete_admin),
        )
        .route("/:id/password", put(update_password))
}

/// List admins, newest first
#[utoipa::path(
    get,
    path = "/admins",
    tag = "Admins",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of admins with pagination metadata", body = Vec<AdminRecord>),
        (status = 500, description = "Store failure, result is []")
    )
)]
pub async fn list_admins(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<ApiResponse<Vec<AdminRecord>>, CollectionError> {
    let page = state.admin_service.list(params).await?;
    Ok(ApiResponse::paginated(page.data, page.meta, MSG_LIST_OK))
}

/// Profile of the authenticated admin
#[utoipa::path(
    get,
    path = "/admins/me",
    tag = "Admins",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller profile", body = AdminResponse),
        (status = 401, description = "Invalid or expired token"),
        (status = 404, description = "No authenticated admin")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    identity: Option<Extension<Identity>>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let identity = identity.map(|Extension(identity)| identity);
    let profile = state.admin_service.profile(identity.as_ref())?;
    Ok(ApiResponse::with_message(profile, MSG_PROFILE_OK))
}

/// Get admin by ID
#[utoipa::path(
    get,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = String, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin found", body = AdminResponse),
        (status = 404, description = "No admin with this id")
    )
)]
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.read(&id).await?;
    Ok(ApiResponse::with_message(admin, MSG_READ_OK))
}

/// Create an admin
#[utoipa::path(
    post,
    path = "/admins",
    tag = "Admins",
    request_body = CreateAdmin,
    responses(
        (status = 200, description = "Admin created", body = AdminResponse),
        (status = 400, description = "Missing credentials, short password, bad email or email taken"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAdmin>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.create(payload).await?;
    Ok(ApiResponse::with_message(admin, MSG_CREATE_OK))
}

/// Update admin profile fields
#[utoipa::path(
    put,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = String, Path, description = "Admin ID")),
    request_body = UpdateAdmin,
    responses(
        (status = 200, description = "Admin updated", body = AdminResponse),
        (status = 400, description = "Invalid field or email taken"),
        (status = 404, description = "No admin with this id")
    )
)]
pub async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateAdmin>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.update(&id, payload).await?;
    Ok(ApiResponse::with_message(admin, MSG_UPDATE_OK))
}

/// Replace an admin's password
#[utoipa::path(
    put,
    path = "/admins/{id}/password",
    tag = "Admins",
    params(("id" = String, Path, description = "Admin ID")),
    request_body = UpdatePassword,
    responses(
        (status = 200, description = "Password updated", body = AdminResponse),
        (status = 400, description = "Password missing or too short"),
        (status = 404, description = "No admin with this id")
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePassword>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.update_password(&id, payload).await?;
    Ok(ApiResponse::with_message(admin, MSG_PASSWORD_OK))
}

/// Permanently delete an admin
#[utoipa::path(
    delete,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = String, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deleted", body = AdminResponse),
        (status = 404, description = "No admin with this id")
    )
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.delete(&id).await?;
    Ok(ApiResponse::with_message(admin, MSG_DELETE_OK))
}

/// Search active admins
#[utoipa::path(
    get,
    path = "/admins/search",
    tag = "Admins",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching admins, at most 10, sorted by name", body = Vec<AdminRecord>),
        (status = 202, description = "Missing parameters or no match, result is []"),
        (status = 500, description = "Store failure, result is []")
    )
)]
pub async fn search_admins(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiResponse<Vec<AdminRecord>>, CollectionError> {
    let records = state
        .admin_service
        .search(query.q.as_deref(), query.fields.as_deref())
        .await?;

    if records.is_empty() {
        return Ok(ApiResponse::no_match());
    }

    Ok(ApiResponse::with_message(records, MSG_SEARCH_OK))
}

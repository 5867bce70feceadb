//! Token command - issue a bearer token for an existing admin.

use std::sync::Arc;

use crate::cli::args::TokenArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{AdminRepository, AdminStore, Database, RecordScope};
use crate::services::{IdentityService, TokenAuthenticator};

/// Execute the token command
pub async fn execute(args: TokenArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let repo: Arc<dyn AdminRepository> = Arc::new(AdminStore::new(db.get_connection()));
    let admin = repo
        .find_by_email(&args.email, RecordScope::Active)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No admin with email {}", args.email)))?;

    let token = TokenAuthenticator::new(repo, config).issue_token(&admin)?;
    let output = serde_json::to_string_pretty(&token)
        .map_err(|e| AppError::internal(e.to_string()))?;
    println!("{}", output);

    Ok(())
}

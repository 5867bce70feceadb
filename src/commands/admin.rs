//! Admin command - seed accounts from the command line.

use validator::Validate;

use crate::cli::args::{AdminAction, AdminArgs};
use crate::config::Config;
use crate::domain::CreateAdmin;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Execute the admin command
pub async fn execute(args: AdminArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let services = Services::from_connection(db.get_connection(), config);

    match args.action {
        AdminAction::Create {
            email,
            password,
            name,
            surname,
            role,
            enabled,
        } => {
            let input = CreateAdmin {
                email: Some(email),
                password: Some(password),
                name,
                surname,
                role,
                enabled: Some(enabled),
            };
            input
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let admin = services.admins().create(input).await?;
            println!("{} {}", admin.id, admin.email);
        }
    }

    Ok(())
}

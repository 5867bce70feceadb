//! Identity service - bearer tokens for admins.
//!
//! Tokens are HS256 JWTs. Resolving a token loads the admin it names from
//! the active records.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Admin, Identity};
use crate::errors::{AppError, AppResult};
use crate::infra::{AdminRepository, RecordScope};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issued bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Mint a token for an admin
    fn issue_token(&self, admin: &Admin) -> AppResult<TokenResponse>;

    /// Verify a token and load the admin it names
    async fn resolve(&self, token: &str) -> AppResult<Identity>;
}

pub struct TokenAuthenticator {
    repo: Arc<dyn AdminRepository>,
    config: Config,
}

impl TokenAuthenticator {
    pub fn new(repo: Arc<dyn AdminRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl IdentityService for TokenAuthenticator {
    fn issue_token(&self, admin: &Admin) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: admin.id,
            email: admin.email.clone(),
            role: admin.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }

    async fn resolve(&self, token: &str) -> AppResult<Identity> {
        let claims = self.verify(token)?;

        self.repo
            .find_by_id(claims.sub, RecordScope::Active)
            .await?
            .map(Identity::from)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockAdminRepository;

    const SECRET: &str = "test-secret-key-with-at-least-32-chars";

    fn admin() -> Admin {
        let now = Utc::now();
        Admin {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$stored".to_string(),
            name: Some("Ada".to_string()),
            surname: None,
            role: "admin".to_string(),
            enabled: true,
            removed: false,
            created: now,
            updated: now,
        }
    }

    fn authenticator(repo: MockAdminRepository) -> TokenAuthenticator {
        TokenAuthenticator::new(Arc::new(repo), Config::new("sqlite::memory:", SECRET))
    }

    #[tokio::test]
    async fn test_issue_then_resolve() {
        let stored = admin();
        let id = stored.id;
        let issued_for = stored.clone();

        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id()
            .withf(move |uuid, scope| *uuid == id && *scope == RecordScope::Active)
            .returning(move |_, _| Ok(Some(stored.clone())));

        let auth = authenticator(repo);
        let token = auth.issue_token(&issued_for).unwrap();
        assert_eq!(token.token_type, TOKEN_TYPE_BEARER);
        assert_eq!(token.expires_in, 24 * SECONDS_PER_HOUR);

        let identity = auth.resolve(&token.access_token).await.unwrap();
        assert_eq!(identity.id, id);
        assert_eq!(identity.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_resolve_rejects_garbage() {
        let err = authenticator(MockAdminRepository::new())
            .resolve("not.a.token")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Jwt(_)));
    }

    #[tokio::test]
    async fn test_resolve_unknown_admin_is_unauthorized() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id().returning(|_, _| Ok(None));

        let auth = authenticator(repo);
        let token = auth.issue_token(&admin()).unwrap();
        let err = auth.resolve(&token.access_token).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}

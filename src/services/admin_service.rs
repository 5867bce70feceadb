//! Admin service - the admin collection use cases.
//!
//! Every operation is a thin pass-through to the repository: validate the
//! input, run one or two queries, shape the result. Store failures bubble up
//! unchanged and are rendered as the generic server error by the HTTP layer.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::ValidateEmail;

use super::container::parallel;
use crate::config::{
    MSG_CREDENTIALS_MISSING, MSG_EMAIL_TAKEN, MSG_INVALID_EMAIL, MSG_PASSWORD_TOO_SHORT,
    MSG_PROFILE_MISSING, ROLE_ADMIN,
};
use crate::domain::{
    AdminChanges, AdminRecord, AdminResponse, AdminSearch, CreateAdmin, Identity, NewAdmin,
    Password, UpdateAdmin, UpdatePassword,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{AdminRepository, RecordScope};
use crate::types::{Paginated, PaginationParams};

/// Admin service trait for dependency injection.
///
/// Ids arrive as raw path segments; anything that is not a UUID is reported
/// the same way as an id with no record behind it.
#[async_trait]
pub trait AdminService: Send + Sync {
    /// One page of admins, newest first, with page metadata
    async fn list(&self, params: PaginationParams) -> AppResult<Paginated<AdminRecord>>;

    /// Redacted view of the caller. Never touches the store.
    fn profile(&self, identity: Option<&Identity>) -> AppResult<AdminResponse>;

    async fn read(&self, id: &str) -> AppResult<AdminResponse>;

    async fn create(&self, input: CreateAdmin) -> AppResult<AdminResponse>;

    /// Apply email/role/name/surname; every other field is ignored
    async fn update(&self, id: &str, input: UpdateAdmin) -> AppResult<AdminResponse>;

    async fn update_password(&self, id: &str, input: UpdatePassword) -> AppResult<AdminResponse>;

    /// Hard delete, returning the redacted view of the removed record
    async fn delete(&self, id: &str) -> AppResult<AdminResponse>;

    /// Substring search over active admins. An empty vec means "no match",
    /// including when the parameters are missing.
    async fn search(&self, query: Option<&str>, fields: Option<&str>)
        -> AppResult<Vec<AdminRecord>>;
}

/// Concrete implementation of AdminService over an injected repository.
pub struct AdminManager {
    repo: Arc<dyn AdminRepository>,
    scope: RecordScope,
}

impl AdminManager {
    pub fn new(repo: Arc<dyn AdminRepository>, scope: RecordScope) -> Self {
        tracing::debug!(?scope, "admin service record scope");
        Self { repo, scope }
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::no_document(raw))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl AdminService for AdminManager {
    async fn list(&self, params: PaginationParams) -> AppResult<Paginated<AdminRecord>> {
        let page = params.page();
        let limit = params.limit();

        let (admins, count) = parallel::join2(
            self.repo.find_page(params.offset(), limit, self.scope),
            self.repo.count(self.scope),
        )
        .await?;

        let records = admins.into_iter().map(AdminRecord::from).collect();
        Ok(Paginated::new(records, page, limit, count))
    }

    fn profile(&self, identity: Option<&Identity>) -> AppResult<AdminResponse> {
        identity
            .map(AdminResponse::from)
            .ok_or_else(|| AppError::not_found(MSG_PROFILE_MISSING))
    }

    async fn read(&self, id: &str) -> AppResult<AdminResponse> {
        let uuid = parse_id(id)?;
        self.repo
            .find_by_id(uuid, self.scope)
            .await?
            .map(AdminResponse::from)
            .ok_or_else(|| AppError::no_document(id))
    }

    async fn create(&self, input: CreateAdmin) -> AppResult<AdminResponse> {
        let (Some(email), Some(password)) = (non_empty(input.email), non_empty(input.password))
        else {
            return Err(AppError::validation(MSG_CREDENTIALS_MISSING));
        };

        Password::check_length(&password)?;

        if !email.validate_email() {
            return Err(AppError::validation(MSG_INVALID_EMAIL));
        }

        if self
            .repo
            .find_by_email(&email, RecordScope::Active)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        let password_hash = Password::new(&password)?.into_string();
        let admin = self
            .repo
            .create(NewAdmin {
                email,
                password_hash,
                name: input.name,
                surname: input.surname,
                role: input.role.unwrap_or_else(|| ROLE_ADMIN.to_string()),
                enabled: input.enabled.unwrap_or(false),
            })
            .await?;

        tracing::info!(admin_id = %admin.id, "admin created");
        Ok(AdminResponse::from(admin))
    }

    async fn update(&self, id: &str, input: UpdateAdmin) -> AppResult<AdminResponse> {
        let uuid = parse_id(id)?;
        let changes = AdminChanges::from(input);

        if let Some(email) = changes.email.as_deref() {
            if self.repo.find_other_by_email(email, uuid).await?.is_some() {
                return Err(AppError::conflict(MSG_EMAIL_TAKEN));
            }
        }

        self.repo
            .update_profile(uuid, changes, self.scope)
            .await?
            .map(AdminResponse::from)
            .ok_or_else(|| AppError::no_document(id))
    }

    async fn update_password(&self, id: &str, input: UpdatePassword) -> AppResult<AdminResponse> {
        let uuid = parse_id(id)?;
        let Some(password) = input.password else {
            return Err(AppError::validation(MSG_PASSWORD_TOO_SHORT));
        };

        let password_hash = Password::new(&password)?.into_string();

        self.repo
            .update_password(uuid, password_hash, self.scope)
            .await?
            .map(AdminResponse::from)
            .ok_or_else(|| AppError::no_document(id))
    }

    async fn delete(&self, id: &str) -> AppResult<AdminResponse> {
        let uuid = parse_id(id)?;
        let admin = self
            .repo
            .delete(uuid, self.scope)
            .await?
            .ok_or_else(|| AppError::no_document(id))?;

        tracing::info!(admin_id = %admin.id, "admin deleted");
        Ok(AdminResponse::from(admin))
    }

    async fn search(
        &self,
        query: Option<&str>,
        fields: Option<&str>,
    ) -> AppResult<Vec<AdminRecord>> {
        let Some(search) = AdminSearch::from_params(query, fields) else {
            return Ok(Vec::new());
        };

        let admins = self.repo.search(&search).await?;
        Ok(admins.into_iter().map(AdminRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Admin, SearchField};
    use crate::infra::MockAdminRepository;
    use chrono::Utc;
    use sea_orm::DbErr;

    fn admin(email: &str) -> Admin {
        let now = Utc::now();
        Admin {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$stored".to_string(),
            name: Some("Ada".to_string()),
            surname: Some("Lovelace".to_string()),
            role: ROLE_ADMIN.to_string(),
            enabled: false,
            removed: false,
            created: now,
            updated: now,
        }
    }

    fn service(repo: MockAdminRepository) -> AdminManager {
        AdminManager::new(Arc::new(repo), RecordScope::All)
    }

    fn create_input(email: &str, password: &str) -> CreateAdmin {
        CreateAdmin {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_computes_pages() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_page()
            .withf(|offset, limit, scope| *offset == 10 && *limit == 10 && *scope == RecordScope::All)
            .returning(|_, _, _| Ok(vec![admin("a@x.com"), admin("b@x.com")]));
        repo.expect_count().returning(|_| Ok(12));

        let page = service(repo)
            .list(PaginationParams::new(2, 10))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.pages, 2);
        assert_eq!(page.meta.count, 12);
    }

    #[tokio::test]
    async fn test_list_defaults_bad_params() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_page()
            .withf(|offset, limit, _| *offset == 0 && *limit == 10)
            .returning(|_, _, _| Ok(vec![]));
        repo.expect_count().returning(|_| Ok(0));

        let params = PaginationParams {
            page: Some("abc".to_string()),
            items: Some("-3".to_string()),
        };
        let page = service(repo).list(params).await.unwrap();

        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.pages, 0);
    }

    #[tokio::test]
    async fn test_list_huge_page_offset_is_bounded() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_page()
            .withf(|offset, limit, _| *offset == i64::MAX as u64 && *limit == 10)
            .returning(|_, _, _| Ok(vec![]));
        repo.expect_count().returning(|_| Ok(3));

        let params = PaginationParams {
            page: Some("1000000000000000000".to_string()),
            items: Some("10".to_string()),
        };
        let page = service(repo).list(params).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.count, 3);
    }

    #[tokio::test]
    async fn test_list_propagates_store_failure() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_page()
            .returning(|_, _, _| Err(AppError::Database(DbErr::Custom("down".into()))));
        repo.expect_count().returning(|_| Ok(3));

        let err = service(repo).list(PaginationParams::default()).await.unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_profile_without_identity_is_not_found() {
        let err = service(MockAdminRepository::new()).profile(None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == MSG_PROFILE_MISSING));
    }

    #[test]
    fn test_profile_projects_identity() {
        let identity = Identity::from(admin("me@x.com"));
        let profile = service(MockAdminRepository::new())
            .profile(Some(&identity))
            .unwrap();
        assert_eq!(profile.email, "me@x.com");
        assert_eq!(profile.id, identity.id);
    }

    #[tokio::test]
    async fn test_read_malformed_id_is_not_found() {
        let err = service(MockAdminRepository::new())
            .read("not-a-uuid")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No document found by this id: not-a-uuid");
    }

    #[tokio::test]
    async fn test_read_missing_record() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id().returning(|_, _| Ok(None));

        let id = Uuid::new_v4().to_string();
        let err = service(repo).read(&id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_missing_credentials() {
        let input = CreateAdmin {
            email: Some("a@x.com".to_string()),
            password: Some(String::new()),
            ..Default::default()
        };
        let err = service(MockAdminRepository::new()).create(input).await.unwrap_err();
        assert_eq!(err.to_string(), MSG_CREDENTIALS_MISSING);
    }

    #[tokio::test]
    async fn test_create_short_password_checked_before_email() {
        let err = service(MockAdminRepository::new())
            .create(create_input("not-an-email", "short"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_PASSWORD_TOO_SHORT);
    }

    #[tokio::test]
    async fn test_create_invalid_email() {
        let err = service(MockAdminRepository::new())
            .create(create_input("not-an-email", "longenough1"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_EMAIL);
    }

    #[tokio::test]
    async fn test_create_duplicate_email_persists_nothing() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_email()
            .withf(|_, scope| *scope == RecordScope::Active)
            .returning(|email, _| Ok(Some(admin(email))));
        repo.expect_create().never();

        let err = service(repo)
            .create(create_input("a@x.com", "longenough1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_hashes_and_applies_defaults() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_email().returning(|_, _| Ok(None));
        repo.expect_create()
            .withf(|new| {
                new.role == ROLE_ADMIN
                    && !new.enabled
                    && new.password_hash.starts_with("$argon2")
                    && Password::from_hash(new.password_hash.clone()).verify("longenough1")
            })
            .returning(|new| {
                let mut created = admin(&new.email);
                created.password_hash = new.password_hash;
                Ok(created)
            });

        let response = service(repo)
            .create(create_input("a@x.com", "longenough1"))
            .await
            .unwrap();
        assert_eq!(response.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_update_conflicting_email_aborts() {
        let target = Uuid::new_v4();
        let mut repo = MockAdminRepository::new();
        repo.expect_find_other_by_email()
            .withf(move |email, exclude| email.to_string() == "taken@x.com" && *exclude == target)
            .returning(|email, _| Ok(Some(admin(email))));
        repo.expect_update_profile().never();

        let input = UpdateAdmin {
            email: Some("taken@x.com".to_string()),
            ..Default::default()
        };
        let err = service(repo)
            .update(&target.to_string(), input)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_EMAIL_TAKEN);
    }

    #[tokio::test]
    async fn test_update_own_email_is_allowed() {
        let existing = admin("me@x.com");
        let id = existing.id;

        let mut repo = MockAdminRepository::new();
        repo.expect_find_other_by_email()
            .withf(move |_, exclude| *exclude == id)
            .returning(|_, _| Ok(None));
        repo.expect_update_profile()
            .withf(move |uuid, changes, _| *uuid == id && changes.email.is_some())
            .returning(move |_, _, _| Ok(Some(existing.clone())));

        let input = UpdateAdmin {
            email: Some("me@x.com".to_string()),
            ..Default::default()
        };
        let response = service(repo).update(&id.to_string(), input).await.unwrap();
        assert_eq!(response.id, id);
    }

    #[tokio::test]
    async fn test_update_password_requires_password() {
        let id = Uuid::new_v4().to_string();
        let err = service(MockAdminRepository::new())
            .update_password(&id, UpdatePassword { password: None })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_PASSWORD_TOO_SHORT);
    }

    #[tokio::test]
    async fn test_update_password_too_short_skips_store() {
        let mut repo = MockAdminRepository::new();
        repo.expect_update_password().never();

        let id = Uuid::new_v4().to_string();
        let input = UpdatePassword {
            password: Some("short".to_string()),
        };
        let err = service(repo).update_password(&id, input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == MSG_PASSWORD_TOO_SHORT));
    }

    #[tokio::test]
    async fn test_update_password_missing_record() {
        let mut repo = MockAdminRepository::new();
        repo.expect_update_password().returning(|_, _, _| Ok(None));

        let id = Uuid::new_v4().to_string();
        let input = UpdatePassword {
            password: Some("longenough1".to_string()),
        };
        let err = service(repo).update_password(&id, input).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_redacted_record() {
        let removed = admin("gone@x.com");
        let id = removed.id;

        let mut repo = MockAdminRepository::new();
        repo.expect_delete()
            .returning(move |_, _| Ok(Some(removed.clone())));

        let response = service(repo).delete(&id.to_string()).await.unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["email"], "gone@x.com");
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_search_without_params_skips_store() {
        let mut repo = MockAdminRepository::new();
        repo.expect_search().never();
        let service = service(repo);

        assert!(service.search(None, Some("name")).await.unwrap().is_empty());
        assert!(service.search(Some("smith"), None).await.unwrap().is_empty());
        assert!(service
            .search(Some("smith"), Some("password"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_passes_only_allowed_fields() {
        let mut repo = MockAdminRepository::new();
        repo.expect_search()
            .withf(|search| {
                search.fields == vec![SearchField::Name, SearchField::Surname]
                    && search.term == "smith"
            })
            .returning(|_| Ok(vec![admin("smith@x.com")]));

        let results = service(repo)
            .search(Some("smith"), Some("name,password,surname"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
    }
}

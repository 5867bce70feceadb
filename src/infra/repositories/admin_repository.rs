//! Admin repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, IdenStatic,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::admin::{self, ActiveModel, Entity as AdminEntity};
use crate::config::MSG_EMAIL_TAKEN;
use crate::domain::{Admin, AdminChanges, AdminSearch, NewAdmin, SearchField, LIKE_ESCAPE};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Which records an operation can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    /// Every record, soft-removed or not
    All,
    /// Only records with `removed = false`
    Active,
}

/// Admin repository trait for dependency injection.
///
/// Lookups that return `None` mean "no record in scope"; the service turns
/// that into a not-found error carrying the requested id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// One page of admins, newest first
    async fn find_page(&self, offset: u64, limit: u64, scope: RecordScope) -> AppResult<Vec<Admin>>;

    /// Number of admins in scope
    async fn count(&self, scope: RecordScope) -> AppResult<u64>;

    async fn find_by_id(&self, id: Uuid, scope: RecordScope) -> AppResult<Option<Admin>>;

    async fn find_by_email(&self, email: &str, scope: RecordScope) -> AppResult<Option<Admin>>;

    /// Any record other than `exclude` holding this email, removed or not
    async fn find_other_by_email(&self, email: &str, exclude: Uuid) -> AppResult<Option<Admin>>;

    /// Insert a new admin. A duplicate active email yields a conflict.
    async fn create(&self, admin: NewAdmin) -> AppResult<Admin>;

    /// Apply profile changes; `None` when the id is not in scope
    async fn update_profile(
        &self,
        id: Uuid,
        changes: AdminChanges,
        scope: RecordScope,
    ) -> AppResult<Option<Admin>>;

    /// Replace the password hash; `None` when the id is not in scope
    async fn update_password(
        &self,
        id: Uuid,
        password_hash: String,
        scope: RecordScope,
    ) -> AppResult<Option<Admin>>;

    /// Permanently remove an admin, returning the deleted row
    async fn delete(&self, id: Uuid, scope: RecordScope) -> AppResult<Option<Admin>>;

    /// Case-insensitive substring search over active admins, sorted by name
    async fn search(&self, search: &AdminSearch) -> AppResult<Vec<Admin>>;
}

/// SeaORM-backed admin repository
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid, scope: RecordScope) -> AppResult<Option<admin::Model>> {
        scoped(AdminEntity::find_by_id(id), scope)
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

fn scoped(select: Select<AdminEntity>, scope: RecordScope) -> Select<AdminEntity> {
    match scope {
        RecordScope::All => select,
        RecordScope::Active => select.filter(admin::Column::Removed.eq(false)),
    }
}

fn column_for(field: SearchField) -> admin::Column {
    match field {
        SearchField::Email => admin::Column::Email,
        SearchField::Name => admin::Column::Name,
        SearchField::Surname => admin::Column::Surname,
        SearchField::Role => admin::Column::Role,
    }
}

/// `LOWER(col) LIKE LOWER(pattern)`, so both sides share the backend's
/// case folding (ASCII-only on SQLite, full Unicode on Postgres).
fn contains_ignoring_case(field: SearchField, pattern: &str) -> SimpleExpr {
    Expr::cust_with_values(
        format!(
            "LOWER(\"{}\") LIKE LOWER(?) ESCAPE '{}'",
            column_for(field).as_str(),
            LIKE_ESCAPE
        ),
        [pattern.to_string()],
    )
}

/// Unique violations on write come from the active-email index.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(MSG_EMAIL_TAKEN),
        _ => AppError::Database(err),
    }
}

#[async_trait]
impl AdminRepository for AdminStore {
    async fn find_page(&self, offset: u64, limit: u64, scope: RecordScope) -> AppResult<Vec<Admin>> {
        let models = scoped(AdminEntity::find(), scope)
            .order_by_desc(admin::Column::Created)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Admin::from).collect())
    }

    async fn count(&self, scope: RecordScope) -> AppResult<u64> {
        scoped(AdminEntity::find(), scope)
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: Uuid, scope: RecordScope) -> AppResult<Option<Admin>> {
        Ok(self.find_model(id, scope).await?.map(Admin::from))
    }

    async fn find_by_email(&self, email: &str, scope: RecordScope) -> AppResult<Option<Admin>> {
        let result = scoped(AdminEntity::find(), scope)
            .filter(admin::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Admin::from))
    }

    async fn find_other_by_email(&self, email: &str, exclude: Uuid) -> AppResult<Option<Admin>> {
        let result = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .filter(admin::Column::Id.ne(exclude))
            .one(&self.db)
            .await?;

        Ok(result.map(Admin::from))
    }

    async fn create(&self, admin: NewAdmin) -> AppResult<Admin> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(admin.email),
            password_hash: Set(admin.password_hash),
            name: Set(admin.name),
            surname: Set(admin.surname),
            role: Set(admin.role),
            enabled: Set(admin.enabled),
            removed: Set(false),
            created: Set(now),
            updated: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        Ok(Admin::from(model))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: AdminChanges,
        scope: RecordScope,
    ) -> AppResult<Option<Admin>> {
        let Some(model) = self.find_model(id, scope).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(role) = changes.role {
            active.role = Set(role);
        }
        if let Some(name) = changes.name {
            active.name = Set(Some(name));
        }
        if let Some(surname) = changes.surname {
            active.surname = Set(Some(surname));
        }
        active.updated = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(Some(Admin::from(model)))
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: String,
        scope: RecordScope,
    ) -> AppResult<Option<Admin>> {
        let Some(model) = self.find_model(id, scope).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.password_hash = Set(password_hash);
        active.updated = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Some(Admin::from(model)))
    }

    async fn delete(&self, id: Uuid, scope: RecordScope) -> AppResult<Option<Admin>> {
        let Some(model) = self.find_model(id, scope).await? else {
            return Ok(None);
        };

        let result = AdminEntity::delete_by_id(model.id).exec(&self.db).await?;

        // Deleted by someone else between the lookup and the delete
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Admin::from(model)))
    }

    async fn search(&self, search: &AdminSearch) -> AppResult<Vec<Admin>> {
        let pattern = search.like_pattern();
        let matches_any = search
            .fields
            .iter()
            .fold(Condition::any(), |cond, field| {
                cond.add(contains_ignoring_case(*field, &pattern))
            });

        let models = AdminEntity::find()
            .filter(matches_any)
            .filter(admin::Column::Removed.eq(false))
            .order_by_asc(admin::Column::Name)
            .limit(search.limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Admin::from).collect())
    }
}

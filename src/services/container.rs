//! Service container - centralized service access plus helpers for running
//! independent queries concurrently.

use std::future::Future;
use std::sync::Arc;

use super::{AdminManager, AdminService, IdentityService, TokenAuthenticator};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{AdminRepository, AdminStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn admins(&self) -> Arc<dyn AdminService>;

    fn identity(&self) -> Arc<dyn IdentityService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    admin_service: Arc<dyn AdminService>,
    identity_service: Arc<dyn IdentityService>,
}

impl Services {
    pub fn new(
        admin_service: Arc<dyn AdminService>,
        identity_service: Arc<dyn IdentityService>,
    ) -> Self {
        Self {
            admin_service,
            identity_service,
        }
    }

    /// Wire every service over one database connection.
    ///
    /// The repository is built here once and shared; nothing else holds a
    /// store handle.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let repo: Arc<dyn AdminRepository> = Arc::new(AdminStore::new(db));
        let admin_service = Arc::new(AdminManager::new(repo.clone(), config.record_scope()));
        let identity_service = Arc::new(TokenAuthenticator::new(repo, config));

        Self {
            admin_service,
            identity_service,
        }
    }
}

impl ServiceContainer for Services {
    fn admins(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    fn identity(&self) -> Arc<dyn IdentityService> {
        self.identity_service.clone()
    }
}

/// Concurrent execution of independent operations.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Run two independent operations concurrently; the first error wins.
    ///
    /// # Example
    /// ```ignore
    /// let (page, total) = parallel::join2(
    ///     repo.find_page(offset, limit, scope),
    ///     repo.count(scope),
    /// ).await?;
    /// ```
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<&'static str> {
            Ok("two")
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, "two");
    }

    #[tokio::test]
    async fn test_parallel_join2_fails_fast() {
        let result = parallel::join2(
            async { Ok::<_, AppError>(1) },
            async { Err::<i32, _>(AppError::internal("count failed")) },
        )
        .await;
        assert!(result.is_err());
    }
}

use sea_orm::{DatabaseConnection, MockDatabase};
use std::sync::Arc;
use std::time::Duration;

use crate::tests::support::stubs::*;
use crate::user::adapter::outgoing::UserRepositoryPostgres;
use crate::user::application::domain::entities::DeleteStrategy;
use crate::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, FetchUserUseCase, UpdateUserUseCase,
};
use crate::user::application::ports::outgoing::{ConfigProvider, RateLimiter, ThrottlePolicy};
use crate::user::application::service::{
    CreateUserService, DeleteUserService, FetchUserService, UpdateUserService,
};
use crate::user::application::UserUseCases;

pub fn test_throttle() -> ThrottlePolicy {
    ThrottlePolicy::new(5, Duration::from_secs(10))
}

/// Real services over a `MockDatabase`-backed repository. The returned
/// connection handle lets tests read the transaction log once the use cases
/// are dropped.
pub fn use_cases_over_mock_db(
    db: MockDatabase,
    strategy: DeleteStrategy,
    rate_limiter: Arc<dyn RateLimiter + Send + Sync>,
    config_provider: Arc<dyn ConfigProvider + Send + Sync>,
) -> (UserUseCases, Arc<DatabaseConnection>) {
    let conn = Arc::new(db.into_connection());
    let repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&conn), strategy));

    let use_cases = UserUseCases {
        create: Arc::new(CreateUserService::new(
            repo.clone(),
            rate_limiter,
            config_provider,
            Arc::new(StubPasswordHasher),
            test_throttle(),
        )),
        update: Arc::new(UpdateUserService::new(repo.clone())),
        delete: Arc::new(DeleteUserService::new(repo.clone())),
        fetch: Arc::new(FetchUserService::new(repo)),
    };

    (use_cases, conn)
}

#[derive(Default)]
pub struct TestUserUseCasesBuilder {
    create: Option<Arc<dyn CreateUserUseCase + Send + Sync>>,
    update: Option<Arc<dyn UpdateUserUseCase + Send + Sync>>,
    delete: Option<Arc<dyn DeleteUserUseCase + Send + Sync>>,
    fetch: Option<Arc<dyn FetchUserUseCase + Send + Sync>>,
}

impl TestUserUseCasesBuilder {
    pub fn with_create(mut self, uc: Arc<dyn CreateUserUseCase + Send + Sync>) -> Self {
        self.create = Some(uc);
        self
    }

    pub fn with_update(mut self, uc: Arc<dyn UpdateUserUseCase + Send + Sync>) -> Self {
        self.update = Some(uc);
        self
    }

    pub fn with_delete(mut self, uc: Arc<dyn DeleteUserUseCase + Send + Sync>) -> Self {
        self.delete = Some(uc);
        self
    }

    pub fn with_fetch(mut self, uc: Arc<dyn FetchUserUseCase + Send + Sync>) -> Self {
        self.fetch = Some(uc);
        self
    }

    pub fn build(self) -> UserUseCases {
        UserUseCases {
            create: self
                .create
                .unwrap_or_else(|| Arc::new(StubCreateUserUseCase::default())),
            update: self.update.unwrap_or_else(|| Arc::new(StubUpdateUserUseCase)),
            delete: self.delete.unwrap_or_else(|| Arc::new(StubDeleteUserUseCase)),
            fetch: self.fetch.unwrap_or_else(|| Arc::new(StubFetchUserUseCase)),
        }
    }
}

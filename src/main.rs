pub mod health;
pub mod modules;
pub mod shared;
pub use modules::user;

use crate::shared::config::{load_env_file, AppConfig};
use crate::user::adapter::incoming::graphql::{build_schema, UserSchema};
use crate::user::adapter::outgoing::jwt::JwtTokenService;
use crate::user::adapter::outgoing::{
    Argon2Hasher, EnvConfigProvider, InMemoryRateLimiter, RedisRateLimiter,
    UserRepositoryPostgres,
};
use crate::user::application::ports::outgoing::{RateLimiter, TokenProvider};
use crate::user::application::service::{
    CreateUserService, DeleteUserService, FetchUserService, UpdateUserService,
};
use crate::user::application::UserUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub schema: UserSchema,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_file();
    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Throttle backend
    let rate_limiter: Arc<dyn RateLimiter + Send + Sync> = match &config.redis_url {
        Some(redis_url) => {
            let redis_pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("failed to create Redis pool")?;
            info!("create-user throttle backed by Redis");
            Arc::new(RedisRateLimiter::new(Arc::new(redis_pool)))
        }
        None => {
            warn!("REDIS_URL not set; create-user throttle is per process");
            Arc::new(InMemoryRateLimiter::new())
        }
    };

    let user_repo = Arc::new(UserRepositoryPostgres::new(
        Arc::clone(&db_arc),
        config.delete_strategy,
    ));

    let use_cases = UserUseCases {
        create: Arc::new(CreateUserService::new(
            user_repo.clone(),
            rate_limiter,
            Arc::new(EnvConfigProvider::new()),
            Arc::new(Argon2Hasher::new()),
            config.create_user_throttle,
        )),
        update: Arc::new(UpdateUserService::new(user_repo.clone())),
        delete: Arc::new(DeleteUserService::new(user_repo.clone())),
        fetch: Arc::new(FetchUserService::new(user_repo)),
    };

    let state = AppState {
        schema: build_schema(use_cases),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // GraphQL
    cfg.service(crate::user::adapter::incoming::web::graphql_handler);
    cfg.service(crate::user::adapter::incoming::web::graphiql_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::api::router::AppState;
use crate::application::{
    ports::{
        ApplicationRepository, CompanyRepository, JobRepository, PasswordHasher, TokenService,
        UserRepository,
    },
    use_cases::{
        ApplyToJobUseCase, AuthenticateUserUseCase, CreateCompanyUseCase, CreateJobUseCase,
        CreateUserUseCase, DeleteCompanyUseCase, DeleteJobUseCase, DeleteUserUseCase,
        GetCompanyUseCase, GetJobUseCase, GetUserUseCase, ListCompaniesUseCase, ListJobsUseCase,
        ListUsersUseCase, UpdateCompanyUseCase, UpdateJobUseCase, UpdateUserUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::{
    auth::{JwtTokenService, Sha256PasswordHasher},
    persistence::{
        PostgresApplicationRepository, PostgresCompanyRepository, PostgresJobRepository,
        PostgresUserRepository,
    },
};

/// Repositories and services every use case is built from
pub struct Ports {
    pub companies: Arc<dyn CompanyRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub users: Arc<dyn UserRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
}

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    ports: Option<Ports>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            ports: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay, retries, e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            max = self.config.db_max_connections,
            min = self.config.db_min_connections,
            acquire_timeout_secs = self.config.db_acquire_timeout_secs,
            idle_timeout_secs = self.config.db_idle_timeout_secs,
            max_lifetime_secs = self.config.db_max_lifetime_secs,
            "Database pool configured"
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Initialize infrastructure layer (repositories, hashing, tokens)
    pub fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        if self.config.uses_dev_secret() {
            warn!("SECRET_KEY is not set; tokens are signed with the development secret");
        }

        self.ports = Some(Ports {
            companies: Arc::new(PostgresCompanyRepository::new(pool.clone())),
            jobs: Arc::new(PostgresJobRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            applications: Arc::new(PostgresApplicationRepository::new(pool.clone())),
            hasher: Arc::new(Sha256PasswordHasher::new(self.config.password_work_factor)),
            tokens: Arc::new(JwtTokenService::new(
                &self.config.secret_key,
                self.config.token_ttl_secs,
            )),
        });

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let ports = self.ports.ok_or("Infrastructure not initialized")?;

        let state = assemble_state(Arc::new(pool), ports, &self.config);
        info!("Application layer initialized");
        Ok(state)
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Wire use cases over the given ports
pub fn assemble_state(pool: Arc<sqlx::PgPool>, ports: Ports, config: &Config) -> AppState {
    let Ports {
        companies,
        jobs,
        users,
        applications,
        hasher,
        tokens,
    } = ports;

    AppState {
        pool,
        tokens: Arc::clone(&tokens),
        max_body_bytes: config.max_body_bytes,
        cors_origins: config.cors_origins.clone(),

        authenticate_user: Arc::new(AuthenticateUserUseCase::new(
            Arc::clone(&users),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        create_user: Arc::new(CreateUserUseCase::new(
            Arc::clone(&users),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        list_users: Arc::new(ListUsersUseCase::new(Arc::clone(&users))),
        get_user: Arc::new(GetUserUseCase::new(Arc::clone(&users))),
        update_user: Arc::new(UpdateUserUseCase::new(Arc::clone(&users), hasher)),
        delete_user: Arc::new(DeleteUserUseCase::new(users)),
        apply_to_job: Arc::new(ApplyToJobUseCase::new(applications)),

        create_company: Arc::new(CreateCompanyUseCase::new(Arc::clone(&companies))),
        list_companies: Arc::new(ListCompaniesUseCase::new(Arc::clone(&companies))),
        get_company: Arc::new(GetCompanyUseCase::new(Arc::clone(&companies))),
        update_company: Arc::new(UpdateCompanyUseCase::new(Arc::clone(&companies))),
        delete_company: Arc::new(DeleteCompanyUseCase::new(companies)),

        create_job: Arc::new(CreateJobUseCase::new(Arc::clone(&jobs))),
        list_jobs: Arc::new(ListJobsUseCase::new(Arc::clone(&jobs))),
        get_job: Arc::new(GetJobUseCase::new(Arc::clone(&jobs))),
        update_job: Arc::new(UpdateJobUseCase::new(Arc::clone(&jobs))),
        delete_job: Arc::new(DeleteJobUseCase::new(jobs)),
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{ApplicationRepository, RepositoryError};
use crate::domain::entities::JobApplication;
use crate::infrastructure::persistence::constraint::map_constraint_violation;

/// PostgreSQL implementation of the application repository
pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn apply(&self, username: &str, job_id: i32) -> Result<JobApplication, RepositoryError> {
        let job: Option<i32> = sqlx::query_scalar("SELECT id FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        if job.is_none() {
            return Err(RepositoryError::NotFound(format!("No job: {}", job_id)));
        }

        let user: Option<String> =
            sqlx::query_scalar("SELECT username FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        if user.is_none() {
            return Err(RepositoryError::NotFound(format!("No username: {}", username)));
        }

        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (username, job_id)
            VALUES ($1, $2)
            RETURNING username, job_id
            "#,
        )
        .bind(username)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || format!("Already applied to job {}", job_id),
                || format!("No job or user for application: {}/{}", username, job_id),
            )
        })?;

        Ok(JobApplication {
            username: row.username,
            job_id: row.job_id,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    username: String,
    job_id: i32,
}

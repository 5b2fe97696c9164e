use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::changes::FieldValue;
use crate::domain::entities::{Job, NewJob};
use crate::domain::filters::JobFilterField;
use crate::infrastructure::persistence::constraint::map_constraint_violation;
use crate::infrastructure::persistence::query_builder::QueryBuilder;
use crate::infrastructure::persistence::sql_fragment::{build_job_filter_predicate, build_set_fragment};

/// PostgreSQL implementation of the job repository
pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let company_handle = job.company_handle.as_str();

        let company: Option<String> =
            sqlx::query_scalar("SELECT handle FROM companies WHERE handle = $1")
                .bind(company_handle)
                .fetch_optional(&self.pool)
                .await?;
        if company.is_none() {
            return Err(RepositoryError::NotFound(format!(
                "No company: {}",
                company_handle
            )));
        }

        let sql = format!(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            QueryBuilder::JOB_COLUMNS
        );
        // The company can vanish between the check and the insert
        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(&job.title)
            .bind(job.salary)
            .bind(job.equity)
            .bind(company_handle)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(
                    e,
                    || "Duplicate job".to_string(),
                    || format!("No company: {}", company_handle),
                )
            })?;

        Ok(row.into_domain())
    }

    async fn find_all(&self) -> Result<Vec<Job>, RepositoryError> {
        let sql = format!("SELECT {} FROM jobs ORDER BY title", QueryBuilder::JOB_COLUMNS);
        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(JobRow::into_domain).collect())
    }

    async fn find_filtered(&self, filter: &[JobFilterField]) -> Result<Vec<Job>, RepositoryError> {
        let predicate = build_job_filter_predicate(filter)?;
        let sql = QueryBuilder::select_where(
            QueryBuilder::JOB_COLUMNS,
            "jobs",
            &predicate.where_clause(),
            "title",
        );

        let query = sqlx::query_as::<_, JobRow>(&sql);
        let rows = QueryBuilder::bind_values(query, &predicate.values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(JobRow::into_domain).collect())
    }

    async fn get(&self, id: i32) -> Result<Job, RepositoryError> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", QueryBuilder::JOB_COLUMNS);
        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("No job: {}", id)))?;

        Ok(row.into_domain())
    }

    async fn update(
        &self,
        id: i32,
        changes: &[(&'static str, FieldValue)],
    ) -> Result<Job, RepositoryError> {
        let fragment = build_set_fragment(changes, &QueryBuilder::JOB_FIELDS)?;
        let sql = QueryBuilder::update_returning(
            "jobs",
            &fragment.set_clause(),
            "id",
            fragment.next_placeholder(),
            QueryBuilder::JOB_COLUMNS,
        );

        let query = sqlx::query_as::<_, JobRow>(&sql);
        let row = QueryBuilder::bind_values(query, &fragment.values)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("No job: {}", id)))?;

        Ok(row.into_domain())
    }

    async fn remove(&self, id: i32) -> Result<(), RepositoryError> {
        let deleted: Option<i32> = sqlx::query_scalar("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!("No job: {}", id))),
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct JobRow {
    id: i32,
    title: String,
    salary: Option<i32>,
    equity: Option<f64>,
    company_handle: String,
}

impl JobRow {
    pub(crate) fn into_domain(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company_handle: self.company_handle,
        }
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{CompanyRepository, RepositoryError};
use crate::domain::changes::FieldValue;
use crate::domain::entities::{Company, CompanyDetail, NewCompany};
use crate::domain::filters::CompanyFilterField;
use crate::infrastructure::persistence::constraint::map_constraint_violation;
use crate::infrastructure::persistence::postgres_job_repository::JobRow;
use crate::infrastructure::persistence::query_builder::QueryBuilder;
use crate::infrastructure::persistence::sql_fragment::{
    build_company_filter_predicate, build_set_fragment,
};

/// PostgreSQL implementation of the company repository
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_row(&self, handle: &str) -> Result<Option<CompanyRow>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM companies WHERE handle = $1",
            QueryBuilder::COMPANY_COLUMNS
        );
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: &NewCompany) -> Result<Company, RepositoryError> {
        let handle = company.handle.as_str();

        if self.find_row(handle).await?.is_some() {
            return Err(RepositoryError::Conflict(format!(
                "Duplicate company: {}",
                handle
            )));
        }

        let sql = format!(
            r#"
            INSERT INTO companies (handle, name, description, num_employees, logo_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            QueryBuilder::COMPANY_COLUMNS
        );
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(handle)
            .bind(&company.name)
            .bind(&company.description)
            .bind(company.num_employees)
            .bind(company.logo_url.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(
                    e,
                    || format!("Duplicate company: {}", handle),
                    || format!("No company: {}", handle),
                )
            })?;

        Ok(row.into_domain())
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM companies ORDER BY name",
            QueryBuilder::COMPANY_COLUMNS
        );
        let rows = sqlx::query_as::<_, CompanyRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(CompanyRow::into_domain).collect())
    }

    async fn find_filtered(
        &self,
        filter: &[CompanyFilterField],
    ) -> Result<Vec<Company>, RepositoryError> {
        let predicate = build_company_filter_predicate(filter)?;
        let sql = QueryBuilder::select_where(
            QueryBuilder::COMPANY_COLUMNS,
            "companies",
            &predicate.where_clause(),
            "name",
        );

        let query = sqlx::query_as::<_, CompanyRow>(&sql);
        let rows = QueryBuilder::bind_values(query, &predicate.values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(CompanyRow::into_domain).collect())
    }

    async fn get(&self, handle: &str) -> Result<CompanyDetail, RepositoryError> {
        let company = self
            .find_row(handle)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("No company: {}", handle)))?;

        let sql = format!(
            "SELECT {} FROM jobs WHERE company_handle = $1 ORDER BY id",
            QueryBuilder::JOB_COLUMNS
        );
        let jobs = sqlx::query_as::<_, JobRow>(&sql)
            .bind(handle)
            .fetch_all(&self.pool)
            .await?;

        Ok(CompanyDetail::new(
            company.into_domain(),
            jobs.into_iter().map(JobRow::into_domain).collect(),
        ))
    }

    async fn update(
        &self,
        handle: &str,
        changes: &[(&'static str, FieldValue)],
    ) -> Result<Company, RepositoryError> {
        let fragment = build_set_fragment(changes, &QueryBuilder::COMPANY_FIELDS)?;
        let sql = QueryBuilder::update_returning(
            "companies",
            &fragment.set_clause(),
            "handle",
            fragment.next_placeholder(),
            QueryBuilder::COMPANY_COLUMNS,
        );

        let query = sqlx::query_as::<_, CompanyRow>(&sql);
        let row = QueryBuilder::bind_values(query, &fragment.values)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(
                    e,
                    || "Company name already taken".to_string(),
                    || format!("No company: {}", handle),
                )
            })?
            .ok_or_else(|| RepositoryError::NotFound(format!("No company: {}", handle)))?;

        Ok(row.into_domain())
    }

    async fn remove(&self, handle: &str) -> Result<(), RepositoryError> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM companies WHERE handle = $1 RETURNING handle")
                .bind(handle)
                .fetch_optional(&self.pool)
                .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!("No company: {}", handle))),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    handle: String,
    name: String,
    description: String,
    num_employees: Option<i32>,
    logo_url: Option<String>,
}

impl CompanyRow {
    fn into_domain(self) -> Company {
        Company {
            handle: self.handle,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        }
    }
}

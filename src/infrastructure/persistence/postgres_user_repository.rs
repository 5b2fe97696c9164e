use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::changes::FieldValue;
use crate::domain::entities::{NewUser, User, UserCredentials, UserDetail};
use crate::infrastructure::persistence::constraint::map_constraint_violation;
use crate::infrastructure::persistence::query_builder::QueryBuilder;
use crate::infrastructure::persistence::sql_fragment::build_set_fragment;

/// PostgreSQL implementation of the user repository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_row(&self, username: &str) -> Result<Option<UserRow>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM users WHERE username = $1",
            QueryBuilder::USER_COLUMNS
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let username = user.username.as_str();

        if self.find_row(username).await?.is_some() {
            return Err(RepositoryError::Conflict(format!(
                "Duplicate username: {}",
                username
            )));
        }

        let sql = format!(
            r#"
            INSERT INTO users (username, password, first_name, last_name, email, is_admin)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            QueryBuilder::USER_COLUMNS
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.is_admin)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(
                    e,
                    || format!("Duplicate username: {}", username),
                    || format!("No user: {}", username),
                )
            })?;

        Ok(row.into_domain())
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError> {
        let sql = format!(
            "SELECT {}, password FROM users WHERE username = $1",
            QueryBuilder::USER_COLUMNS
        );
        let row = sqlx::query_as::<_, CredentialsRow>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| UserCredentials {
            user: r.user.into_domain(),
            password_hash: r.password,
        }))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM users ORDER BY username",
            QueryBuilder::USER_COLUMNS
        );
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserRow::into_domain).collect())
    }

    async fn get(&self, username: &str) -> Result<UserDetail, RepositoryError> {
        let user = self
            .find_row(username)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("No user: {}", username)))?;

        let jobs: Vec<i32> = sqlx::query_scalar(
            "SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(UserDetail {
            user: user.into_domain(),
            jobs,
        })
    }

    async fn update(
        &self,
        username: &str,
        changes: &[(&'static str, FieldValue)],
    ) -> Result<User, RepositoryError> {
        let fragment = build_set_fragment(changes, &QueryBuilder::USER_FIELDS)?;
        let sql = QueryBuilder::update_returning(
            "users",
            &fragment.set_clause(),
            "username",
            fragment.next_placeholder(),
            QueryBuilder::USER_COLUMNS,
        );

        let query = sqlx::query_as::<_, UserRow>(&sql);
        let row = QueryBuilder::bind_values(query, &fragment.values)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("No user: {}", username)))?;

        Ok(row.into_domain())
    }

    async fn remove(&self, username: &str) -> Result<(), RepositoryError> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM users WHERE username = $1 RETURNING username")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!("No user: {}", username))),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
}

impl UserRow {
    fn into_domain(self) -> User {
        User {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            is_admin: self.is_admin,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    #[sqlx(flatten)]
    user: UserRow,
    password: String,
}

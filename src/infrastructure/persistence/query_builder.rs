use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use crate::domain::changes::FieldValue;
use crate::infrastructure::persistence::sql_fragment::FieldTranslation;

/// Common SQL fragments shared by the entity repositories
pub struct QueryBuilder;

impl QueryBuilder {
    /// Public columns of a company, in row order
    pub const COMPANY_COLUMNS: &'static str = "handle, name, description, num_employees, logo_url";

    /// Public columns of a job; equity is stored as NUMERIC and read as float8
    pub const JOB_COLUMNS: &'static str =
        "id, title, salary, equity::float8 AS equity, company_handle";

    pub const USER_COLUMNS: &'static str = "username, first_name, last_name, email, is_admin";

    pub const COMPANY_FIELDS: FieldTranslation =
        FieldTranslation::new(&[("numEmployees", "num_employees"), ("logoUrl", "logo_url")]);

    pub const JOB_FIELDS: FieldTranslation =
        FieldTranslation::new(&[("companyHandle", "company_handle")]);

    pub const USER_FIELDS: FieldTranslation = FieldTranslation::new(&[
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("isAdmin", "is_admin"),
    ]);

    /// `SELECT <columns> FROM <table> WHERE <predicate> ORDER BY <order>`
    pub fn select_where(columns: &str, table: &str, predicate: &str, order_by: &str) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} ORDER BY {}",
            columns, table, predicate, order_by
        )
    }

    /// `UPDATE <table> SET <set> WHERE <key> = $<n> RETURNING <columns>`
    pub fn update_returning(
        table: &str,
        set_clause: &str,
        key_column: &str,
        key_placeholder: usize,
        columns: &str,
    ) -> String {
        format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            table, set_clause, key_column, key_placeholder, columns
        )
    }

    /// Bind fragment values in placeholder order
    pub fn bind_values<'q, O>(
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
        values: &'q [FieldValue],
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for value in values {
            query = match value {
                FieldValue::Text(v) => query.bind(v.as_deref()),
                FieldValue::Integer(v) => query.bind(*v),
                FieldValue::Decimal(v) => query.bind(*v),
                FieldValue::Boolean(v) => query.bind(*v),
            };
        }
        query
    }
}

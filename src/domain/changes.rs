//! Partial updates ("changes") for companies, jobs and users.
//!
//! A PATCH body is a JSON object whose keys are public field names. Each entity
//! parses it into a closed enum of updatable fields, validating every value on the
//! way; unknown keys and wrong types are rejected rather than ignored. Key order of
//! the body is kept so placeholder positions follow the request.

use serde_json::{Map, Value};

use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;

/// A typed column value; `None` writes SQL NULL
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i32>),
    Decimal(Option<f64>),
    Boolean(Option<bool>),
}

/// Ordered `(public field, value)` pairs ready for a SET fragment
pub type Changeset = Vec<(&'static str, FieldValue)>;

/// A closed set of updatable fields of one entity
pub trait ChangeField: Sized {
    const ENTITY: &'static str;

    fn parse(key: &str, value: &Value) -> Result<Self, DomainError>;

    fn field(&self) -> &'static str;

    fn into_value(self) -> FieldValue;
}

/// Parse a PATCH body into typed changes, in body order
pub fn parse_changes<F: ChangeField>(body: &Map<String, Value>) -> Result<Vec<F>, DomainError> {
    body.iter().map(|(key, value)| F::parse(key, value)).collect()
}

pub fn into_changeset<F: ChangeField>(changes: Vec<F>) -> Changeset {
    changes
        .into_iter()
        .map(|change| (change.field(), change.into_value()))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompanyChange {
    Name(String),
    Description(String),
    NumEmployees(Option<i32>),
    LogoUrl(Option<String>),
}

impl ChangeField for CompanyChange {
    const ENTITY: &'static str = "company";

    fn parse(key: &str, value: &Value) -> Result<Self, DomainError> {
        match key {
            "name" => {
                let name = required_text("name", value)?;
                Validation::validate_not_empty(&name, "name")?;
                Ok(Self::Name(name))
            }
            "description" => Ok(Self::Description(required_text("description", value)?)),
            "numEmployees" => {
                let count = nullable_integer("numEmployees", value)?;
                if let Some(n) = count {
                    Validation::validate_range(n, "numEmployees", Some(0), None)?;
                }
                Ok(Self::NumEmployees(count))
            }
            "logoUrl" => {
                let url = nullable_text("logoUrl", value)?;
                if let Some(u) = &url {
                    Validation::validate_url(u, "logoUrl")?;
                }
                Ok(Self::LogoUrl(url))
            }
            other => Err(unknown_field::<Self>(other)),
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::NumEmployees(_) => "numEmployees",
            Self::LogoUrl(_) => "logoUrl",
        }
    }

    fn into_value(self) -> FieldValue {
        match self {
            Self::Name(v) | Self::Description(v) => FieldValue::Text(Some(v)),
            Self::NumEmployees(v) => FieldValue::Integer(v),
            Self::LogoUrl(v) => FieldValue::Text(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobChange {
    Title(String),
    Salary(Option<i32>),
    Equity(Option<f64>),
}

impl ChangeField for JobChange {
    const ENTITY: &'static str = "job";

    fn parse(key: &str, value: &Value) -> Result<Self, DomainError> {
        match key {
            "title" => {
                let title = required_text("title", value)?;
                Validation::validate_not_empty(&title, "title")?;
                Ok(Self::Title(title))
            }
            "salary" => {
                let salary = nullable_integer("salary", value)?;
                if let Some(s) = salary {
                    Validation::validate_range(s, "salary", Some(0), None)?;
                }
                Ok(Self::Salary(salary))
            }
            "equity" => {
                let equity = nullable_decimal("equity", value)?;
                if let Some(e) = equity {
                    Validation::validate_range(e, "equity", Some(0.0), Some(1.0))?;
                }
                Ok(Self::Equity(equity))
            }
            other => Err(unknown_field::<Self>(other)),
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Salary(_) => "salary",
            Self::Equity(_) => "equity",
        }
    }

    fn into_value(self) -> FieldValue {
        match self {
            Self::Title(v) => FieldValue::Text(Some(v)),
            Self::Salary(v) => FieldValue::Integer(v),
            Self::Equity(v) => FieldValue::Decimal(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserChange {
    FirstName(String),
    LastName(String),
    Email(String),
    /// Plain-text password; replaced by its hash before it reaches storage
    Password(String),
}

impl ChangeField for UserChange {
    const ENTITY: &'static str = "user";

    fn parse(key: &str, value: &Value) -> Result<Self, DomainError> {
        match key {
            "firstName" => {
                let name = required_text("firstName", value)?;
                Validation::validate_length(&name, "firstName", Some(1), Some(30))?;
                Ok(Self::FirstName(name))
            }
            "lastName" => {
                let name = required_text("lastName", value)?;
                Validation::validate_length(&name, "lastName", Some(1), Some(30))?;
                Ok(Self::LastName(name))
            }
            "email" => {
                let email = required_text("email", value)?;
                Validation::validate_email(&email, "email")?;
                Validation::validate_length(&email, "email", Some(6), Some(60))?;
                Ok(Self::Email(email))
            }
            "password" => {
                let password = required_text("password", value)?;
                Validation::validate_length(&password, "password", Some(5), Some(20))?;
                Ok(Self::Password(password))
            }
            other => Err(unknown_field::<Self>(other)),
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "firstName",
            Self::LastName(_) => "lastName",
            Self::Email(_) => "email",
            Self::Password(_) => "password",
        }
    }

    fn into_value(self) -> FieldValue {
        match self {
            Self::FirstName(v) | Self::LastName(v) | Self::Email(v) | Self::Password(v) => {
                FieldValue::Text(Some(v))
            }
        }
    }
}

fn unknown_field<F: ChangeField>(key: &str) -> DomainError {
    DomainError::UnknownField {
        entity: F::ENTITY,
        field: key.to_string(),
    }
}

fn required_text(field: &str, value: &Value) -> Result<String, DomainError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DomainError::validation(field, "expected a string"))
}

fn nullable_text(field: &str, value: &Value) -> Result<Option<String>, DomainError> {
    match value {
        Value::Null => Ok(None),
        other => required_text(field, other).map(Some),
    }
}

fn nullable_integer(field: &str, value: &Value) -> Result<Option<i32>, DomainError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| DomainError::validation(field, "expected a 32-bit integer")),
        _ => Err(DomainError::validation(field, "expected an integer or null")),
    }
}

fn nullable_decimal(field: &str, value: &Value) -> Result<Option<f64>, DomainError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| DomainError::validation(field, "expected a number")),
        _ => Err(DomainError::validation(field, "expected a number or null")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_company_changes_keep_body_order() {
        let changes: Vec<CompanyChange> = parse_changes(&body(json!({
            "numEmployees": 10,
            "name": "New",
            "logoUrl": null,
        })))
        .unwrap();

        assert_eq!(
            into_changeset(changes),
            vec![
                ("numEmployees", FieldValue::Integer(Some(10))),
                ("name", FieldValue::Text(Some("New".to_string()))),
                ("logoUrl", FieldValue::Text(None)),
            ]
        );
    }

    #[test]
    fn test_company_handle_is_not_updatable() {
        let err = parse_changes::<CompanyChange>(&body(json!({ "handle": "c1-new" }))).unwrap_err();

        assert_eq!(
            err,
            DomainError::UnknownField {
                entity: "company",
                field: "handle".to_string()
            }
        );
    }

    #[test]
    fn test_company_change_type_and_range_checks() {
        assert!(parse_changes::<CompanyChange>(&body(json!({ "numEmployees": "ten" }))).is_err());
        assert!(parse_changes::<CompanyChange>(&body(json!({ "numEmployees": -1 }))).is_err());
        assert!(parse_changes::<CompanyChange>(&body(json!({ "logoUrl": "not-a-url" }))).is_err());
        assert!(parse_changes::<CompanyChange>(&body(json!({ "name": null }))).is_err());
        assert!(parse_changes::<CompanyChange>(&body(json!({ "name": "" }))).is_err());
    }

    #[test]
    fn test_job_changes() {
        let changes: Vec<JobChange> = parse_changes(&body(json!({
            "title": "Engineer",
            "salary": null,
            "equity": 0.5,
        })))
        .unwrap();

        assert_eq!(
            changes,
            vec![
                JobChange::Title("Engineer".to_string()),
                JobChange::Salary(None),
                JobChange::Equity(Some(0.5)),
            ]
        );
    }

    #[test]
    fn test_job_company_and_id_are_not_updatable() {
        assert!(parse_changes::<JobChange>(&body(json!({ "companyHandle": "c2" }))).is_err());
        assert!(parse_changes::<JobChange>(&body(json!({ "id": 7 }))).is_err());
    }

    #[test]
    fn test_job_equity_bounds() {
        assert!(parse_changes::<JobChange>(&body(json!({ "equity": 1.0 }))).is_ok());
        assert!(parse_changes::<JobChange>(&body(json!({ "equity": 1.5 }))).is_err());
        assert!(parse_changes::<JobChange>(&body(json!({ "salary": 3_000_000_000i64 }))).is_err());
    }

    #[test]
    fn test_user_changes() {
        let changes: Vec<UserChange> = parse_changes(&body(json!({
            "firstName": "New",
            "email": "new@email.com",
        })))
        .unwrap();

        assert_eq!(
            into_changeset(changes),
            vec![
                ("firstName", FieldValue::Text(Some("New".to_string()))),
                ("email", FieldValue::Text(Some("new@email.com".to_string()))),
            ]
        );
    }

    #[test]
    fn test_user_cannot_change_admin_flag_or_username() {
        assert!(parse_changes::<UserChange>(&body(json!({ "isAdmin": true }))).is_err());
        assert!(parse_changes::<UserChange>(&body(json!({ "username": "other" }))).is_err());
    }

    #[test]
    fn test_empty_body_parses_to_no_changes() {
        let changes: Vec<JobChange> = parse_changes(&Map::new()).unwrap();
        assert!(changes.is_empty());
    }
}
